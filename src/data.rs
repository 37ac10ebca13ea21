mod city;
pub use city::*;

mod college;
pub use college::*;

mod testimonial;
pub use testimonial::*;

mod user;
pub use user::*;

pub mod fixtures;

/// Course taxonomy shown in browse/filter surfaces.
pub const COURSES: &[&str] = &[
	"Engineering",
	"Management",
	"Medical",
	"Law",
	"Science",
	"Arts",
	"Commerce",
	"Computer Applications",
	"Design",
	"Architecture",
];

pub const FACILITIES: &[&str] = &[
	"Hostel",
	"Sports Complex",
	"Library",
	"Cafeteria",
	"Gym",
	"WiFi",
	"Labs",
	"Auditorium",
	"Transport",
	"Medical Center",
];

pub const STATES: &[&str] = &[
	"Maharashtra",
	"Delhi",
	"Karnataka",
	"Tamil Nadu",
	"Telangana",
	"Uttar Pradesh",
	"West Bengal",
	"Gujarat",
	"Rajasthan",
	"Kerala",
];
