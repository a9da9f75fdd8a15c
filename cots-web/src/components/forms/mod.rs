mod field_errors_view;
mod submission_status_view;

pub use field_errors_view::FieldErrorsView;
pub use submission_status_view::SubmissionStatusView;
