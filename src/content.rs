//! Static site content: navigation tree, service showcase and locations

use crate::lead::MainService;

/// Entry of a dropdown submenu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub route: &'static str,
    pub description: &'static str,
}

/// Top-level header entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub route: &'static str,
    pub submenu: &'static [NavLink],
}

impl NavItem {
    pub fn has_submenu(&self) -> bool {
        !self.submenu.is_empty()
    }
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Home",
        route: "/",
        submenu: &[],
    },
    NavItem {
        label: "About",
        route: "/Aboutus",
        submenu: &[],
    },
    NavItem {
        label: "Marketing",
        route: "/Marketing",
        submenu: &[
            NavLink {
                label: "SEO",
                route: "/marketing/seo",
                description: "Improve your search engine ranking and visibility.",
            },
            NavLink {
                label: "Content",
                route: "/marketing/content",
                description: "Create engaging content to attract and retain customers.",
            },
        ],
    },
    NavItem {
        label: "Technology",
        route: "/Technology",
        submenu: &[
            NavLink {
                label: "Web Development",
                route: "/technology/WebService",
                description: "Build responsive and robust websites and apps.",
            },
            NavLink {
                label: "Blockchain",
                route: "/technology/blockchain",
                description: "Integrate blockchain solutions for secure transactions.",
            },
        ],
    },
    NavItem {
        label: "Design",
        route: "/Design",
        submenu: &[
            NavLink {
                label: "UX",
                route: "/design/ux",
                description: "Enhance user satisfaction through intuitive design.",
            },
            NavLink {
                label: "UI",
                route: "/design/ui",
                description: "Create visually appealing and user-friendly interfaces.",
            },
        ],
    },
    NavItem {
        label: "Contact",
        route: "/contact",
        submenu: &[],
    },
];

/// Heading and blurb shown above a service grid
pub fn service_intro(service: MainService) -> (&'static str, &'static str) {
    match service {
        MainService::Marketing => (
            "Expertise That Powers Growth",
            "We deliver data-driven marketing services tailored to your brand, combining strategy, creativity and technology to accelerate your digital growth.",
        ),
        MainService::Technology => (
            "Technology That Scales With You",
            "From websites to cloud platforms and AI, we engineer reliable systems that move your business forward.",
        ),
        MainService::Design => (
            "Design That Tells Your Story",
            "Identity, packaging and creative content crafted to make your brand recognisable at a glance.",
        ),
    }
}

/// Card body for one sub-service
pub fn service_description(service: MainService) -> &'static str {
    match service {
        MainService::Marketing => "We manage your social media to grow your audience, boost engagement, and strengthen your brand presence online.",
        MainService::Technology => "We design, build and run software that fits your business, from first prototype to production.",
        MainService::Design => "We shape the look and feel of your brand across screens, print and packaging.",
    }
}

/// Card layout of a location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationLayout {
    /// One slider for the whole card
    Full,
    /// One slider per sub-location
    Split,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubLocation {
    pub label: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub images: &'static [&'static str],
    pub start_delay_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationCard {
    pub title: &'static str,
    pub description: &'static str,
    pub address: Option<&'static str>,
    pub phone: Option<&'static str>,
    pub sub_locations: &'static [SubLocation],
    pub images: &'static [&'static str],
    pub start_delay_ms: u64,
    pub layout: LocationLayout,
}

pub const LOCATIONS: &[LocationCard] = &[
    LocationCard {
        title: "Australia",
        description: "Our state-of-the-art workspace in Australia offers modern amenities and flexible environments designed to foster creativity and business success.",
        address: Some("1 Redwood Dr Notting Hill VIC 3168 Australia"),
        phone: Some("0434276273"),
        sub_locations: &[],
        images: &["ausimage1.jpeg", "ausimage2.jpeg", "ausimage3.jpeg"],
        start_delay_ms: 0,
        layout: LocationLayout::Full,
    },
    LocationCard {
        title: "Sri Lanka",
        description: "Our Sri Lankan hub is a blend of culture and tech innovation, fueling regional growth and talent development.",
        address: None,
        phone: None,
        sub_locations: &[
            SubLocation {
                label: "Kandy",
                address: "3rd Floor, All in One Holdings Headquarters, 349/2/1 Katugastota Rd, Kandy 20800",
                phone: "0812121051",
                images: &["locimage2.png", "locimage3.png", "locimage1.png"],
                start_delay_ms: 500,
            },
            SubLocation {
                label: "Colombo",
                address: "22 Sea Avenue, Colombo 00300",
                phone: "0812121051",
                images: &["loccol1.jpeg", "loccol2.jpeg"],
                start_delay_ms: 1500,
            },
        ],
        images: &[
            "loccol1.jpeg",
            "loccol2.jpeg",
            "locimage2.png",
            "locimage1.png",
            "locimage3.png",
        ],
        start_delay_ms: 1800,
        layout: LocationLayout::Split,
    },
    LocationCard {
        title: "USA",
        description: "Our U.S. office is strategically located to serve clients nationwide with tailored solutions and tech leadership.",
        address: Some("456 Enterprise Lane, San Francisco, CA 94107"),
        phone: Some("+1 415 123 4567"),
        sub_locations: &[],
        images: &["locimage1.png", "locimage3.png", "locimage2.png"],
        start_delay_ms: 3800,
        layout: LocationLayout::Full,
    },
];

/// Company contact details shown beside the form
pub struct ContactInfo {
    pub address: &'static [&'static str],
    pub phones: &'static [&'static str],
    pub email: &'static str,
    pub socials: &'static [(&'static str, &'static str)],
}

pub const CONTACT_INFO: ContactInfo = ContactInfo {
    address: &[
        "3rd Floor, All in one Holdings,",
        "349/2/1 Katugastota Rd,",
        "Kandy, Sri Lanka.",
    ],
    phones: &["+94 81 2121 051", "+94 76 8572 709"],
    email: "info@allinoneholdings.com",
    socials: &[
        ("Facebook", "https://www.facebook.com/allinoneholdings"),
        ("Instagram", "https://www.instagram.com/all_in_one_holdings"),
        ("Google", "https://g.co/kgs/Cw4rrUZ"),
    ],
};
