pub mod consultation_mode;
pub mod consultation_status;
pub mod doctor_specialty;
pub mod order_status;

pub use consultation_mode::ConsultationMode;
pub use consultation_status::ConsultationStatus;
pub use doctor_specialty::DoctorSpecialty;
pub use order_status::{OrderStatus, PaymentStatus};
