//! Static display content for the studio page.
//!
//! Everything here is defined once at startup and never mutated. Components
//! borrow these slices directly.

/// Project category used by the gallery tabs.
///
/// `All` is the "show everything" sentinel and is never an item's own category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    All,
    Mobile,
    Saas,
    Client,
}

impl Category {
    pub const TABS: [Category; 4] = [
        Category::All,
        Category::Mobile,
        Category::Saas,
        Category::Client,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Mobile => "mobile",
            Category::Saas => "saas",
            Category::Client => "client",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "All Projects",
            Category::Mobile => "Mobile Apps",
            Category::Saas => "SaaS Products",
            Category::Client => "Client Projects",
        }
    }

    pub fn from_id(id: &str) -> Option<Category> {
        Category::TABS.into_iter().find(|c| c.id() == id)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CatalogItem {
    pub id: u32,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub image_path: &'static str,
    pub tags: &'static [&'static str],
    pub link: &'static str,
    pub category: Category,
}

/// A phone mockup in the portfolio showcase.
#[derive(Clone, Debug, PartialEq)]
pub struct ShowcaseApp {
    pub id: u32,
    pub name: &'static str,
    pub alt: &'static str,
    pub image_path: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PriceTier {
    pub name: &'static str,
    pub price: &'static str,
    pub blurb: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WorkflowStep {
    pub title: &'static str,
    pub blurb: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CaseStudy {
    pub title: &'static str,
    pub blurb: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TeamStat {
    pub value: &'static str,
    pub label: &'static str,
}

/// Nav anchors, in page order.
pub static NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#services", "Services"),
    ("#portfolio", "Portfolio"),
    ("#workflow", "Workflow"),
    ("#pricing", "Pricing"),
    ("#contact", "Contact"),
];

pub static SERVICES: &[Service] = &[
    Service {
        icon: "📱",
        title: "App Design",
        blurb: "Mobile-first UI/UX, prototypes, and launch-ready screens.",
    },
    Service {
        icon: "💻",
        title: "Website Design",
        blurb: "Performance-focused, accessible websites and landing pages.",
    },
    Service {
        icon: "🤖",
        title: "AI Agent Design",
        blurb: "Conversational AI, agent flows, persona & prompt design.",
    },
    Service {
        icon: "🔁",
        title: "Workflow Design",
        blurb: "End-to-end user journeys, process mapping and optimizations.",
    },
    Service {
        icon: "⚙️",
        title: "Automation",
        blurb: "Integrations, automations and dashboards for scale.",
    },
];

pub static SHOWCASE_APPS: &[ShowcaseApp] = &[
    ShowcaseApp { id: 1, name: "Social App", alt: "Social App UI", image_path: "/assets/ai-app.jpg" },
    ShowcaseApp { id: 2, name: "Shopping App", alt: "E-commerce App UI", image_path: "/assets/app.jpg" },
    ShowcaseApp { id: 3, name: "Banking Dashboard", alt: "Finance App UI", image_path: "/assets/commerce.jpg" },
    ShowcaseApp { id: 4, name: "Fitness Tracker", alt: "Fitness App UI", image_path: "/assets/food.jpg" },
    ShowcaseApp { id: 5, name: "Travel Planner", alt: "Travel App UI", image_path: "/assets/social.jpg" },
    ShowcaseApp { id: 6, name: "Food Delivery", alt: "Food App UI", image_path: "/assets/travel.jpg" },
];

/// The two AI agent cards shown under the phone showcase.
pub static AGENT_PROJECTS: &[ShowcaseApp] = &[
    ShowcaseApp {
        id: 1,
        name: "Merchant App — Inventory & Sales",
        alt: "App design + automation for small retailers.",
        image_path: "/assets/n8n.png",
    },
    ShowcaseApp {
        id: 2,
        name: "AI Sales Agent",
        alt: "Conversational agent that qualifies leads & schedules demos.",
        image_path: "/assets/img.png",
    },
];

pub static PROJECTS: &[CatalogItem] = &[
    CatalogItem {
        id: 1,
        title: "Food Delivery App",
        subtitle: "Multi-vendor food ordering platform",
        image_path: "/assets/food.jpg",
        tags: &["React Native", "Node.js", "Firebase"],
        link: "#",
        category: Category::Mobile,
    },
    CatalogItem {
        id: 2,
        title: "Event Management",
        subtitle: "Arabic event booking & ticketing",
        image_path: "/assets/app.jpg",
        tags: &["Flutter", "AWS", "Redux"],
        link: "#",
        category: Category::Mobile,
    },
    CatalogItem {
        id: 3,
        title: "B2B E-commerce",
        subtitle: "Wholesale marketplace solution",
        image_path: "/assets/commerce.jpg",
        tags: &["React Native", "Supabase", "TypeScript"],
        link: "#",
        category: Category::Mobile,
    },
    CatalogItem {
        id: 4,
        title: "HR Management",
        subtitle: "Employee tracking & payroll",
        image_path: "/assets/ai-app.jpg",
        tags: &["Flutter", "Firebase", "GCP"],
        link: "#",
        category: Category::Mobile,
    },
    CatalogItem {
        id: 5,
        title: "Logistics & Travel",
        subtitle: "Fleet management system",
        image_path: "/assets/social.jpg",
        tags: &["Kotlin", "Node.js", "AWS"],
        link: "#",
        category: Category::Mobile,
    },
    CatalogItem {
        id: 6,
        title: "Plant Care App",
        subtitle: "Smart gardening assistant",
        image_path: "/assets/app.jpg",
        tags: &["Swift", "Firebase", "AI"],
        link: "#",
        category: Category::Mobile,
    },
    CatalogItem {
        id: 7,
        title: "Diabetic Alarm",
        subtitle: "Health monitoring & reminders",
        image_path: "/assets/food.jpg",
        tags: &["React Native", "Appwrite", "Redux"],
        link: "#",
        category: Category::Mobile,
    },
    CatalogItem {
        id: 8,
        title: "AI Meeting Summary",
        subtitle: "Auto transcribe & summarize",
        image_path: "/assets/ai-app.jpg",
        tags: &["Flutter", "OpenAI", "Firebase"],
        link: "#",
        category: Category::Mobile,
    },
    CatalogItem {
        id: 9,
        title: "AI WayToBill",
        subtitle: "Smart invoicing automation",
        image_path: "/assets/n8n.png",
        tags: &["React Native", "AI", "Stripe"],
        link: "#",
        category: Category::Saas,
    },
    CatalogItem {
        id: 10,
        title: "AI TharPay",
        subtitle: "Payment processing platform",
        image_path: "/assets/img.png",
        tags: &["React Native", "Node.js", "AI"],
        link: "#",
        category: Category::Saas,
    },
    CatalogItem {
        id: 11,
        title: "AI Explain Screenshot",
        subtitle: "Visual content analyzer",
        image_path: "/assets/app.jpg",
        tags: &["React Native", "OpenAI", "AWS"],
        link: "#",
        category: Category::Saas,
    },
];

pub static TECH_STACK: &[&str] = &[
    "React Native", "Flutter", "Kotlin", "Swift", "Java",
    "Node.js", "Firebase", "Supabase", "Appwrite", "AWS",
    "GCP", "Redux", "TypeScript", "CI/CD", "Docker",
];

pub static TOOLS: &[&str] = &[
    "VS Code", "Xcode", "Android Studio", "Figma",
    "Git", "Postman", "MongoDB", "PostgreSQL",
];

pub static WORKFLOW: &[WorkflowStep] = &[
    WorkflowStep { title: "Discover", blurb: "Stakeholder interviews, goals, success metrics." },
    WorkflowStep { title: "Design", blurb: "Wireframes, prototypes, UI kit and visual system." },
    WorkflowStep { title: "Build", blurb: "Development, QA, and automated workflows." },
    WorkflowStep { title: "Launch", blurb: "Deploy, analytics, iterate and scale." },
];

pub static CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        title: "Retailer App",
        blurb: "Reduced checkout time by 40% using flow optimizations.",
    },
    CaseStudy {
        title: "AI Chat Agent",
        blurb: "Increased lead qualification by 3x through automated routing.",
    },
];

pub static TEAM_STATS: &[TeamStat] = &[
    TeamStat { value: "14+", label: "Projects" },
    TeamStat { value: "10", label: "Markets" },
];

pub static PRICING: &[PriceTier] = &[
    PriceTier { name: "Starter", price: "₹9,999", blurb: "Basic app/web design + 2 weeks support." },
    PriceTier { name: "Business", price: "₹29,999", blurb: "App + Automation setup + 1 month support." },
    PriceTier { name: "Enterprise", price: "Custom", blurb: "Full product design, AI agent and integrations." },
];

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Abhishek turned our idea into a product in 6 weeks — incredible!",
        author: "Rahul, Founder",
    },
    Testimonial {
        quote: "The AI agent automations cut our support load in half.",
        author: "Meera, Ops Lead",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn project_ids_are_unique() {
        let ids: HashSet<u32> = PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn no_project_uses_the_all_sentinel() {
        assert!(PROJECTS.iter().all(|p| p.category != Category::All));
    }

    #[test]
    fn category_ids_round_trip_through_tabs() {
        for tab in Category::TABS {
            assert_eq!(Category::from_id(tab.id()), Some(tab));
        }
        assert_eq!(Category::from_id("nonexistent"), None);
    }
}
