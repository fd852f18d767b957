mod desktop_home;
mod home;
mod mobile_home;
mod not_found;

pub use desktop_home::DesktopHome;
pub use home::HomePage;
pub use mobile_home::MobileHome;
pub use not_found::NotFoundPage;
