mod event;
mod recurrence;

pub mod dtos {
    pub use crate::event::dtos::*;
    pub use crate::recurrence::dtos::*;
}
