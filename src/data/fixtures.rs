//! Seed records bundled with the application, standing in for a real backend.

use super::{City, College, FeeRange, Location, Placements, Testimonial, User};

pub struct Fixtures {
	pub colleges: Vec<College>,
	pub cities: Vec<City>,
	pub testimonials: Vec<Testimonial>,
	pub users: Vec<User>,
}

pub fn seed() -> Fixtures {
	Fixtures {
		colleges: colleges(),
		cities: cities(),
		testimonials: testimonials(),
		users: users(),
	}
}

fn colleges() -> Vec<College> {
	vec![
		College {
			id: "1".into(),
			name: "MIT Institute of Technology".into(),
			location: Location { city: "Mumbai".into(), state: "Maharashtra".into() },
			rating: 4.8,
			reviews: 1243,
			ranking: 1,
			fees: FeeRange { min: 200000, max: 300000, per_semester: None },
			courses: vec!["B.Tech".into(), "M.Tech".into(), "MBA".into(), "Ph.D".into()],
			facilities: vec![
				"Library".into(), "Sports Complex".into(), "WiFi".into(),
				"Hostel".into(), "Cafeteria".into(), "Labs".into(),
			],
			image: "https://images.unsplash.com/photo-1486312338219-ce68d2c6f44d".into(),
			description: "MIT Institute of Technology is one of the premier institutions known for academic excellence and research innovations. Established with a vision to provide quality education, the institute has grown into a center of excellence in engineering, technology, and management studies.".into(),
			established: 1990,
			website: "www.mit-institute.edu".into(),
			placements: Some(Placements {
				average_package: 1200000,
				highest_package: 4500000,
				placement_percentage: 94,
				top_recruiters: vec![
					"TCS".into(), "Infosys".into(), "Google".into(), "Microsoft".into(),
				],
			}),
			awards: vec![
				"Best Engineering Institute 2023".into(),
				"Excellence in Research Award".into(),
			],
			accreditation: vec!["AICTE".into(), "UGC".into()],
			nirf: Some(1),
			naac: Some("A++".into()),
			featured: true,
		},
		College {
			id: "2".into(),
			name: "Delhi Universal College".into(),
			location: Location { city: "Delhi".into(), state: "Delhi".into() },
			rating: 4.7,
			reviews: 989,
			ranking: 2,
			fees: FeeRange { min: 180000, max: 260000, per_semester: Some(95000) },
			courses: vec!["B.Tech".into(), "BBA".into(), "MBA".into(), "B.Com".into()],
			facilities: vec![
				"Library".into(), "Sports Complex".into(), "WiFi".into(),
				"Hostel".into(), "Cafeteria".into(),
			],
			image: "https://images.unsplash.com/photo-1518770660439-4636190af475".into(),
			description: "Delhi Universal College is devoted to excellence in teaching, learning, and research, and developing leaders across disciplines who make a positive difference in the world.".into(),
			established: 1995,
			website: "www.duc.edu".into(),
			placements: None,
			awards: Vec::new(),
			accreditation: vec!["UGC".into()],
			nirf: None,
			naac: Some("A+".into()),
			featured: true,
		},
		College {
			id: "3".into(),
			name: "Bangalore Institute of Science".into(),
			location: Location { city: "Bangalore".into(), state: "Karnataka".into() },
			rating: 4.6,
			reviews: 1120,
			ranking: 3,
			fees: FeeRange { min: 220000, max: 320000, per_semester: None },
			courses: vec![
				"B.Tech".into(), "M.Tech".into(), "BCA".into(), "MCA".into(), "Ph.D".into(),
			],
			facilities: vec![
				"Library".into(), "Labs".into(), "WiFi".into(),
				"Hostel".into(), "Cafeteria".into(), "Gym".into(),
			],
			image: "https://images.unsplash.com/photo-1488590528505-98d2b5aba04b".into(),
			description: "The Bangalore Institute of Science is recognized for its outstanding contribution to academics and research in the field of science and technology. With a strong emphasis on practical learning, the institute prepares students for real-world challenges.".into(),
			established: 1988,
			website: "www.bis.edu".into(),
			placements: Some(Placements {
				average_package: 1050000,
				highest_package: 3800000,
				placement_percentage: 91,
				top_recruiters: vec!["Wipro".into(), "Amazon".into(), "Flipkart".into()],
			}),
			awards: Vec::new(),
			accreditation: vec!["AICTE".into(), "UGC".into()],
			nirf: Some(4),
			naac: Some("A+".into()),
			featured: true,
		},
		College {
			id: "4".into(),
			name: "Chennai Advanced Management School".into(),
			location: Location { city: "Chennai".into(), state: "Tamil Nadu".into() },
			rating: 4.5,
			reviews: 876,
			ranking: 4,
			fees: FeeRange { min: 250000, max: 350000, per_semester: None },
			courses: vec![
				"BBA".into(), "MBA".into(), "PGDM".into(), "Executive MBA".into(),
			],
			facilities: vec![
				"Library".into(), "Digital Labs".into(), "WiFi".into(),
				"Hostel".into(), "Cafeteria".into(), "Auditorium".into(),
			],
			image: "https://images.unsplash.com/photo-1461749280684-dccba630e2f6".into(),
			description: "Chennai Advanced Management School is a premier business school offering world-class education in management and business studies. With a focus on case studies and experiential learning, it produces industry-ready professionals.".into(),
			established: 1997,
			website: "www.cams.edu".into(),
			placements: Some(Placements {
				average_package: 900000,
				highest_package: 2600000,
				placement_percentage: 88,
				top_recruiters: vec!["Deloitte".into(), "KPMG".into(), "HDFC Bank".into()],
			}),
			awards: vec!["Top B-School South India 2022".into()],
			accreditation: Vec::new(),
			nirf: None,
			naac: None,
			featured: false,
		},
		College {
			id: "5".into(),
			name: "Pune Liberal Arts College".into(),
			location: Location { city: "Pune".into(), state: "Maharashtra".into() },
			rating: 4.4,
			reviews: 756,
			ranking: 5,
			fees: FeeRange { min: 170000, max: 230000, per_semester: None },
			courses: vec![
				"BA".into(), "MA".into(), "BFA".into(), "MFA".into(), "B.Design".into(),
			],
			facilities: vec![
				"Library".into(), "Art Studios".into(), "WiFi".into(),
				"Hostel".into(), "Cafeteria".into(), "Exhibition Halls".into(),
			],
			image: "https://images.unsplash.com/photo-1649972904349-6e44c42644a7".into(),
			description: "Pune Liberal Arts College is known for its innovative approach to arts education, blending traditional arts disciplines with modern technology and design thinking. The campus is designed to inspire creativity and critical thinking.".into(),
			established: 2001,
			website: "www.plac.edu".into(),
			placements: None,
			awards: Vec::new(),
			accreditation: vec!["UGC".into()],
			nirf: None,
			naac: Some("A".into()),
			featured: false,
		},
		College {
			id: "6".into(),
			name: "Hyderabad Engineering University".into(),
			location: Location { city: "Hyderabad".into(), state: "Telangana".into() },
			rating: 4.3,
			reviews: 920,
			ranking: 6,
			fees: FeeRange { min: 210000, max: 290000, per_semester: None },
			courses: vec![
				"B.Tech".into(), "M.Tech".into(), "B.Arch".into(), "Ph.D".into(),
			],
			facilities: vec![
				"Library".into(), "Research Labs".into(), "WiFi".into(),
				"Hostel".into(), "Cafeteria".into(), "Sports".into(),
			],
			image: "https://images.unsplash.com/photo-1486312338219-ce68d2c6f44d".into(),
			description: "Hyderabad Engineering University is renowned for its cutting-edge research and innovation in various engineering disciplines. The institution has strong industry connections that help students gain practical exposure and employment opportunities.".into(),
			established: 1992,
			website: "www.heu.edu".into(),
			placements: None,
			awards: Vec::new(),
			accreditation: vec!["AICTE".into()],
			nirf: None,
			naac: None,
			featured: false,
		},
		College {
			id: "7".into(),
			name: "Kolkata National College".into(),
			location: Location { city: "Kolkata".into(), state: "West Bengal".into() },
			rating: 4.2,
			reviews: 684,
			ranking: 7,
			fees: FeeRange { min: 150000, max: 210000, per_semester: None },
			courses: vec!["BA".into(), "B.Com".into(), "LLB".into(), "MA".into()],
			facilities: vec![
				"Library".into(), "WiFi".into(), "Hostel".into(),
				"Cafeteria".into(), "Auditorium".into(),
			],
			image: "https://images.unsplash.com/photo-1498243691581-b145c3f54a5a".into(),
			description: "Kolkata National College carries over a century of tradition in humanities, commerce, and law education. Its alumni network spans the judiciary, public service, and the arts across the country.".into(),
			established: 1985,
			website: "www.knc.edu".into(),
			placements: None,
			awards: Vec::new(),
			accreditation: vec!["UGC".into()],
			nirf: None,
			naac: Some("B++".into()),
			featured: false,
		},
	]
}

fn cities() -> Vec<City> {
	vec![
		City {
			id: "1".into(),
			name: "Mumbai".into(),
			state: "Maharashtra".into(),
			count: 145,
			image: "https://images.unsplash.com/photo-1529253355930-ddbe423a2ac7".into(),
		},
		City {
			id: "2".into(),
			name: "Delhi".into(),
			state: "Delhi".into(),
			count: 137,
			image: "https://images.unsplash.com/photo-1587474260584-136574528ed5".into(),
		},
		City {
			id: "3".into(),
			name: "Bangalore".into(),
			state: "Karnataka".into(),
			count: 120,
			image: "https://images.unsplash.com/photo-1596176530529-78163a4f7af2".into(),
		},
		City {
			id: "4".into(),
			name: "Chennai".into(),
			state: "Tamil Nadu".into(),
			count: 98,
			image: "https://images.unsplash.com/photo-1582510003544-4d00b7f74220".into(),
		},
		City {
			id: "5".into(),
			name: "Pune".into(),
			state: "Maharashtra".into(),
			count: 87,
			image: "https://images.unsplash.com/photo-1625730029752-38c95112bbc1".into(),
		},
		City {
			id: "6".into(),
			name: "Hyderabad".into(),
			state: "Telangana".into(),
			count: 92,
			image: "https://images.unsplash.com/photo-1626014303757-6366ef55c4ab".into(),
		},
	]
}

fn testimonials() -> Vec<Testimonial> {
	vec![
		Testimonial {
			id: "1".into(),
			name: "Aarav Sharma".into(),
			college: "MIT Institute of Technology".into(),
			image: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e".into(),
			quote: "Studying at MIT was a transformative experience. The faculty's expertise and the vibrant campus life prepared me well for my career in tech.".into(),
			course: "B.Tech Computer Science".into(),
			year: 2022,
		},
		Testimonial {
			id: "2".into(),
			name: "Priya Patel".into(),
			college: "Delhi Universal College".into(),
			image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330".into(),
			quote: "DUC provided me with countless opportunities to grow both academically and personally. The industry connections helped me secure a great job right after graduation.".into(),
			course: "MBA Finance".into(),
			year: 2021,
		},
		Testimonial {
			id: "3".into(),
			name: "Vikram Reddy".into(),
			college: "Bangalore Institute of Science".into(),
			image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d".into(),
			quote: "The research facilities at BIS are world-class. I got to work on cutting-edge projects that have real-world applications, which was incredible.".into(),
			course: "M.Tech AI & ML".into(),
			year: 2023,
		},
	]
}

fn users() -> Vec<User> {
	vec![
		User {
			id: "1".into(),
			name: "John Doe".into(),
			email: "john@example.com".into(),
			image: Some("https://ui-avatars.com/api/?name=John+Doe&background=random".into()),
			wishlist: vec!["1".into(), "3".into()],
		},
		User {
			id: "2".into(),
			name: "Meera Iyer".into(),
			email: "meera@example.com".into(),
			image: Some("https://ui-avatars.com/api/?name=Meera+Iyer&background=random".into()),
			wishlist: Vec::new(),
		},
	]
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashSet;

	#[test]
	fn college_ids_and_rankings_are_unique() {
		let colleges = colleges();
		let ids: HashSet<_> = colleges.iter().map(|c| c.id.as_str()).collect();
		let rankings: HashSet<_> = colleges.iter().map(|c| c.ranking).collect();
		assert_eq!(ids.len(), colleges.len());
		assert_eq!(rankings.len(), colleges.len());
	}

	#[test]
	fn seed_wishlists_reference_known_colleges() {
		let fixtures = seed();
		let known: HashSet<_> = fixtures.colleges.iter().map(|c| c.id.as_str()).collect();
		for user in &fixtures.users {
			for id in &user.wishlist {
				assert!(known.contains(id.as_str()), "{} wishlists unknown college {id}", user.name);
			}
		}
	}

	#[test]
	fn seed_contains_the_demo_account() {
		let fixtures = seed();
		let john = fixtures.users.iter().find(|u| u.email == "john@example.com").unwrap();
		assert_eq!(john.id, "1");
		assert_eq!(john.wishlist, vec!["1".to_owned(), "3".to_owned()]);
	}
}
