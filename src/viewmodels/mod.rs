pub mod login_form;
pub mod review_form;

pub use login_form::LoginFormViewModel;
pub use review_form::ReviewFormViewModel;

/// Fases del ciclo de un formulario. La transición la dispara únicamente
/// el evento submit; no hay timeout ni cancelación.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormPhase {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}
