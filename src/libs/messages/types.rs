use crate::libs::error::ErrorType;
use crate::libs::todo::TodoFilter;

#[derive(Debug, Clone)]
pub enum Message {
    // === TODO MESSAGES ===
    TodoAdded(String),
    TodoUpdated(String),
    TodoDeleted(u32),
    TodoCompleted(String),
    TodoReopened(String),
    TodoNotFound(u32),
    TodoUnchanged,
    TodosHeader(TodoFilter),
    NoTodos,
    NoVisibleTodos(TodoFilter),
    CompletedCleared(usize),
    NothingToClear,
    AllCompleted,
    AllReopened,
    ItemsLeft(usize),
    SavingPlaceholder,

    // === ERROR BANNER ===
    ErrorBanner(ErrorType),
    ErrorBannerHint,

    // === USER MESSAGES ===
    UserNotConfigured,
    UserNotConfiguredHint,
    InvalidUserId(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigPath(String),
    ConfigDeleted,
    ConfigNotFound,
    ConfigModuleApi,
    ConfigModuleUser,

    // === PROMPTS ===
    PromptSelectModules,
    PromptApiUrl,
    PromptUserId,
    PromptAction,
    PromptNewTitle,
    PromptSelectTodo,
    PromptEditTitle,
    PromptFilter,

    // === INTERACTIVE MENU ===
    MenuAdd,
    MenuToggle,
    MenuEdit,
    MenuDelete,
    MenuToggleAll,
    MenuClearCompleted,
    MenuFilter,
    MenuDismissError,
    MenuRefresh,
    MenuQuit,
    Goodbye,
}
