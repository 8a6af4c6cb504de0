pub mod project_target;
pub mod render_context;
pub mod report;

pub use crate::domain::DomainError;
pub use project_target::ProjectTarget;
pub use render_context::RenderContext;
pub use report::{
    CheckReport, CheckRow, CheckStatus, InitReport, ScaffoldStep, StepOutcome, StepStatus,
};
