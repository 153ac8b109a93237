mod modals;
mod notifications;
mod progress;
mod section;

pub use modals::ResetConfirmModal;
pub use notifications::NotificationStack;
pub use progress::ProgressCards;
pub use section::ChecklistSection;
