//! Domain entities of the production-scheduling message model
//!
//! Every entity knows how to construct itself from a generic XML proxy
//! element and how to generate its proxy subtree, recursing structurally
//! through the containment tree.

pub mod data_type;
pub mod equipment_requirement;
pub mod hierarchy_scope;
pub mod identifier;
pub mod material_requirement;
pub mod material_use;
pub mod process_production_schedule;
pub mod production_request;
pub mod production_schedule;
pub mod quantity;
pub mod segment_requirement;

pub use data_type::DataType;
pub use equipment_requirement::EquipmentRequirement;
pub use hierarchy_scope::{EquipmentElementLevel, HierarchyScope};
pub use identifier::IdentifierType;
pub use material_requirement::MaterialRequirement;
pub use material_use::MaterialUse;
pub use process_production_schedule::ProcessProductionSchedule;
pub use production_request::{ProductionRequest, SchedulingParameters};
pub use production_schedule::ProductionSchedule;
pub use quantity::QuantityValue;
pub use segment_requirement::SegmentRequirement;
