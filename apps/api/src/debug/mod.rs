// Internal debug endpoints for inspecting and resetting AI resume processing.
// Storage failures surface their underlying error text (AppError::Diagnostic).

pub mod handlers;
