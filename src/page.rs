mod colleges;
pub use colleges::*;

mod detail;
pub use detail::*;

mod home;
pub use home::*;

mod index;
pub use index::*;

mod login;
pub use login::*;

mod profile;
pub use profile::*;

mod signup;
pub use signup::*;
