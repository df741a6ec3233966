//! Static copy for the landing sections

/// A feature card in the "Why Merch AI?" section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

/// A pricing plan card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub highlight: bool,
}

pub const BRAND: &str = "Merch AI";

pub const HERO_TITLE_LEAD: &str = "Scalable, ";
pub const HERO_TITLE_ACCENT: &str = "Depthful";
pub const HERO_TITLE_TAIL: &str = " Research automation for Startups";
pub const HERO_SUBTITLE: &str = "AI Automation for Researches requiring more depth & accuracy.";

pub const FEATURES_HEADING_ACCENT: &str = "Why";
pub const FEATURES_HEADING_TAIL: &str = " Merch AI?";

pub static FEATURES: [Feature; 5] = [
    Feature {
        icon: "⌕",
        title: "Search through more than 10k Social media posts",
        body: "AI can search through more than 10k Social media posts without skipping a detail to give you the most relevent results for your prompt.",
    },
    Feature {
        icon: "▦",
        title: "Automatically generate Organized insights while researching in seconds",
        body: "As AI progresses through research process, it automatically organizes the learned insights in spreadsheets to provide you with the most relevant summary.",
    },
    Feature {
        icon: "✓",
        title: "Access to real-time data & Authenticated articles",
        body: "Optimized to give you the most recent & accurate insights possible",
    },
    Feature {
        icon: "◷",
        title: "Research with focus on Detail",
        body: "Merch Researches with focus on detail of the insights, time taken for the research may vary according to the time limit value you can optionally select before starting the research.",
    },
    Feature {
        icon: "▣",
        title: "Full control over organization of project data & learned insights",
        body: "You can control the organization of project data & learned insights, you can also export the data in various formats. This helps AI to better understand the data & provide more accurate insights.",
    },
];

pub const ACTION_TAG_LEAD: &str = "Merch in ";
pub const ACTION_TAG_ACCENT: &str = "Action";
pub const ACTION_TITLE_LEAD: &str = "Make market decisions with ";
pub const ACTION_TITLE_ACCENT: &str = "Evidence";
pub const ACTION_TITLE_TAIL: &str = ", not guesses";

/// Feature cards grouped as laid out: three on the first row, two on the second
pub fn feature_rows() -> [&'static [Feature]; 2] {
    [&FEATURES[..3], &FEATURES[3..]]
}

pub const CTA_TITLE: &str = "Understand your market before you bet months of work on it";

pub const PRICING_HEADING_LEAD: &str = "Simple, Transparent ";
pub const PRICING_HEADING_ACCENT: &str = "Pricing";
pub const PRICING_SUBTITLE: &str = "Choose the plan that fits your needs";
pub const PRICE_SUFFIX: &str = "/month";
pub const PLAN_BUTTON: &str = "Coming soon";
pub const HIGHLIGHT_BADGE: &str = "Most Popular";

pub static PLANS: [Plan; 4] = [
    Plan {
        name: "Free",
        price: "$0",
        description: "Perfect for testing the waters",
        features: &[
            "3 Projects",
            "Basic Search Agent",
            "Access to Merch Agent v1",
            "4 folders",
            "CSV Export",
            "3 Searches per Research",
        ],
        highlight: false,
    },
    Plan {
        name: "Bronze",
        price: "$20",
        description: "For individuals and small teams",
        features: &[
            "10 projects",
            "Access to Merch Agent v2",
            "Unlimited Folders",
            "CSV Export",
            "Maximum 15 Searches per Research",
        ],
        highlight: true,
    },
    Plan {
        name: "Platinum",
        price: "$40",
        description: "Best for growing businesses",
        features: &[
            "Unlimited projects",
            "Access to Merch Agent v3",
            "Unlimited Folders",
            "Image Search",
            "CSV Export",
            "Maximum 35 Searches per Research",
        ],
        highlight: false,
    },
    Plan {
        name: "Diamond",
        price: "$60",
        description: "Maximum power and control",
        features: &[
            "Unlimited Projects",
            "Access to the most advanced Merch Agent",
            "Unlimited Folders",
            "Image Search",
            "CSV Export",
            "Maximum 100 Searches per Research",
        ],
        highlight: false,
    },
];
