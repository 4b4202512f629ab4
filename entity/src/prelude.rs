pub use super::course::Entity as Course;
pub use super::enrollment::Entity as Enrollment;
pub use super::instructor::Entity as Instructor;
pub use super::module::Entity as Module;
pub use super::user::Entity as User;
