mod shell;
pub use shell::Shell;

mod home;
pub use home::{Access, Home, NotFound, RequestBlood};

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod dashboard;
pub use dashboard::{Admin, Dashboard, RecipientDashboard};
