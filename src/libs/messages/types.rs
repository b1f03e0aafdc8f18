#[derive(Debug, Clone)]
pub enum Message {
    // === ENTRY MESSAGES ===
    EntrySaved(String),   // date
    EntryDeleted(String), // date
    EntryPreview,
    NoEntriesFound,
    DuplicateDate(String),
    EntryIndexOutOfRange(usize),
    ReasonRequired,
    ConfirmSaveEntry,
    ConfirmDeleteEntry(String),
    ConfirmClearBank,
    OperationCancelled,

    // === BANK MESSAGES ===
    BankHeader,
    BankCleared,
    InvalidDate(String),

    // === PROMPT MESSAGES ===
    PromptDate,
    PromptScheduledEnd,
    PromptActualEnd,
    PromptReason,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    PromptSelectModules,
    ConfigModuleExport,
    ConfigModuleSchedule,
    PromptExportSubject,
    PromptDefaultScheduledEnd,

    // === EXPORT MESSAGES ===
    ExportOpening(String),    // target
    ExportOpenFailed(String), // underlying error
    NothingToExport,
}
