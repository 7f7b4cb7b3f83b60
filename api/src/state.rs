//! Application state shared across HTTP handlers.

use std::sync::Arc;

use todolist_application::{
    CompleteTodoItemHandler, CreateTodoListHandler, GetTodoListHandler, GetTodoListsHandler,
    TodoListRepository,
};

/// Shared handler set, cloned cheaply per request.
///
/// Handlers hold no per-request state; all of them share the one repository
/// the binary wired up.
#[derive(Clone)]
pub struct AppState {
    /// Creates todo lists.
    pub create_todo_list: Arc<CreateTodoListHandler>,
    /// Completes a single item, rolling up list completion.
    pub complete_todo_item: Arc<CompleteTodoItemHandler>,
    /// Reads every stored list.
    pub get_todo_lists: Arc<GetTodoListsHandler>,
    /// Reads one list by identifier.
    pub get_todo_list: Arc<GetTodoListHandler>,
}

impl AppState {
    /// Builds the handler set on top of a repository.
    #[must_use]
    pub fn new(repository: Arc<dyn TodoListRepository>) -> Self {
        Self {
            create_todo_list: Arc::new(CreateTodoListHandler::new(repository.clone())),
            complete_todo_item: Arc::new(CompleteTodoItemHandler::new(repository.clone())),
            get_todo_lists: Arc::new(GetTodoListsHandler::new(repository.clone())),
            get_todo_list: Arc::new(GetTodoListHandler::new(repository)),
        }
    }
}
