mod home;
pub use home::Home;

mod hotels;
pub use hotels::Hotels;

mod hotel_detail;
pub use hotel_detail::HotelDetail;

mod transport;
pub use transport::Transport;

mod packages;
pub use packages::Packages;

mod login;
pub use login::Login;

mod register;
pub use register::Register;
