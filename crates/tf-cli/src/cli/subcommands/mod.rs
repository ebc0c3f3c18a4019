mod employee;
mod task;

pub use employee::EmployeeCommands;
pub use task::TaskCommands;
