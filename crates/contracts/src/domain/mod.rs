pub mod a001_health_professional;
pub mod a002_consultation;
pub mod a003_prescription;
pub mod a004_order;
