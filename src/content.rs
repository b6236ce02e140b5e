//! Static page content. Everything here is read-only copy rendered by the
//! landing sections; none of it is fetched or persisted.

pub struct NavItem {
    pub label: &'static str,
    pub section_id: &'static str,
}

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 3],
}

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub image: &'static str,
    pub growth: &'static str,
    pub metric: &'static str,
}

pub struct Stat {
    pub icon: &'static str,
    pub number: &'static str,
    pub label: &'static str,
}

pub struct AboutPoint {
    pub title: &'static str,
    pub detail: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Services", section_id: "services" },
    NavItem { label: "Work", section_id: "testimonials" },
    NavItem { label: "About", section_id: "about" },
    NavItem { label: "Contact", section_id: "contact" },
];

pub const SERVICES: &[Service] = &[
    Service {
        icon: "🚀",
        title: "Digital Strategy",
        description: "Data-driven approaches to maximize your digital presence and achieve sustainable growth.",
        features: ["Market Analysis", "Competitor Research", "Growth Planning"],
    },
    Service {
        icon: "🎯",
        title: "Brand Development",
        description: "Create memorable brand experiences that resonate with your target audience.",
        features: ["Brand Identity", "Voice & Tone", "Visual Design"],
    },
    Service {
        icon: "📊",
        title: "Growth Marketing",
        description: "Scale your business with proven marketing tactics and optimization strategies.",
        features: ["SEO Optimization", "Content Strategy", "Performance Marketing"],
    },
    Service {
        icon: "💡",
        title: "Content Creation",
        description: "Engaging content that tells your brand story and drives user engagement.",
        features: ["Copywriting", "Visual Content", "Video Production"],
    },
    Service {
        icon: "👥",
        title: "Social Media",
        description: "Build and engage your community across all relevant platforms.",
        features: ["Platform Strategy", "Community Management", "Paid Social"],
    },
    Service {
        icon: "💬",
        title: "Analytics",
        description: "Deep insights to drive informed decisions and optimize performance.",
        features: ["Data Analysis", "Performance Tracking", "ROI Reporting"],
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Their innovative approach transformed our digital presence completely. The results exceeded our expectations in every way possible.",
        author: "Sarah Johnson",
        role: "CEO, TechStart",
        image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?ixlib=rb-1.2.1&auto=format&fit=crop&w=200&q=80",
        growth: "156%",
        metric: "Revenue Growth",
    },
    Testimonial {
        quote: "The results exceeded our expectations. Best marketing investment ever. Their team's dedication to our success was evident throughout.",
        author: "Michael Chen",
        role: "Founder, GrowthLabs",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?ixlib=rb-1.2.1&auto=format&fit=crop&w=200&q=80",
        growth: "2.4x",
        metric: "User Engagement",
    },
    Testimonial {
        quote: "Professional, creative, and data-driven. Exactly what we needed to scale our business to the next level.",
        author: "Emma Williams",
        role: "Marketing Director, InnovateCo",
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?ixlib=rb-1.2.1&auto=format&fit=crop&w=200&q=80",
        growth: "89%",
        metric: "Conversion Rate",
    },
];

pub const STATS: &[Stat] = &[
    Stat { icon: "👥", number: "250+", label: "Clients Served" },
    Stat { icon: "🏆", number: "95%", label: "Client Retention" },
    Stat { icon: "🎯", number: "15+", label: "Years Experience" },
    Stat { icon: "🚀", number: "500+", label: "Projects Completed" },
];

pub const ABOUT_POINTS: &[AboutPoint] = &[
    AboutPoint {
        title: "Data-Driven Approach",
        detail: "Every strategy is backed by comprehensive market research and analytics",
    },
    AboutPoint {
        title: "Creative Excellence",
        detail: "Pushing boundaries with innovative solutions that capture attention",
    },
    AboutPoint {
        title: "Results Focused",
        detail: "Measurable outcomes that directly impact your bottom line",
    },
];

pub const CONTACT_EMAIL: &str = "contact@futureforward.com";
pub const CONTACT_PHONE: &str = "+1 (555) 123-4567";
pub const CONTACT_ADDRESS: &str = "123 Innovation Street, Tech City";

pub const HERO_TITLE: &str = "Future Forward Marketing";
pub const HERO_SUBTITLE: &str =
    "Transforming brands through innovative digital solutions and cutting-edge marketing strategies";

pub const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1451187580459-43490279c0fa?ixlib=rb-1.2.1&auto=format&fit=crop&w=2000&q=80";
pub const TEAM_IMAGE: &str =
    "https://images.unsplash.com/photo-1522071820081-009f0129c71c?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_items_point_at_real_sections() {
        let section_ids = ["services", "testimonials", "about", "contact"];
        assert!(!NAV_ITEMS.is_empty());
        for item in NAV_ITEMS {
            assert!(!item.label.is_empty());
            assert!(
                section_ids.contains(&item.section_id),
                "unknown section id {}",
                item.section_id
            );
        }
    }

    #[test]
    fn services_grid_is_complete() {
        assert_eq!(SERVICES.len(), 6);
        for service in SERVICES {
            assert!(!service.title.is_empty());
            assert!(!service.description.is_empty());
            for feature in &service.features {
                assert!(!feature.is_empty());
            }
        }
    }

    #[test]
    fn every_testimonial_carries_a_growth_stat() {
        assert!(!TESTIMONIALS.is_empty());
        for testimonial in TESTIMONIALS {
            assert!(!testimonial.quote.is_empty());
            assert!(!testimonial.author.is_empty());
            assert!(!testimonial.role.is_empty());
            assert!(testimonial.image.starts_with("https://"));
            assert!(!testimonial.growth.is_empty());
            assert!(!testimonial.metric.is_empty());
        }
    }

    #[test]
    fn stats_band_has_four_tiles() {
        assert_eq!(STATS.len(), 4);
        for stat in STATS {
            assert!(!stat.number.is_empty());
            assert!(!stat.label.is_empty());
        }
    }
}
