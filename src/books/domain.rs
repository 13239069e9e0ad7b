use crate::core::domain::Identifiable;

pub mod model;

pub(crate) trait Book: Identifiable {
    fn is_finished(&self) -> bool;
    fn is_reading(&self) -> bool;
}
