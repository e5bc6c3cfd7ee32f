pub mod loading;
pub mod nav;
pub mod toast;
