// Built-in catalog tables. Converted once into an owned `IndustryCatalog` at startup.
//
// Opening lines and resource descriptions are templates. Placeholders:
// {title}, {company}, {industry}, {focus_area}, {role_phrase}.

pub(super) struct BuiltinIndustry {
    pub name: &'static str,
    pub company_prefixes: &'static [&'static str],
    pub company_suffixes: &'static [&'static str],
    pub job_titles: &'static [&'static str],
    pub opening_lines: &'static [&'static str],
    pub resource_description: Option<&'static str>,
    pub focus_options: &'static [&'static str],
    pub role_options: &'static [&'static str],
}

pub(super) const FIRST_NAMES: &[&str] = &[
    "Michael", "Sarah", "David", "Jennifer", "Robert", "Emma", "James", "Lisa", "William",
    "Rachel",
];

pub(super) const LAST_NAMES: &[&str] = &[
    "Anderson", "Chen", "Patel", "Martinez", "Thompson", "Rodriguez", "Smith", "Johnson",
    "Wilson", "Brown",
];

/// Industry-agnostic names appended to every company pool.
pub(super) const BASE_COMPANIES: &[&str] = &[
    "Tech Innovators Ltd",
    "Digital Solutions Inc",
    "Global Systems Corp",
    "Future Enterprises",
    "Smart Business Solutions",
];

/// Titles every industry shares; industry titles extend this set.
pub(super) const BASE_TITLES: &[&str] = &[
    "CEO",
    "Founder",
    "Managing Director",
    "Business Owner",
    "Director of Operations",
];

pub(super) const FALLBACK: BuiltinIndustry = BuiltinIndustry {
    name: "General",
    company_prefixes: &["Global", "Advanced", "Innovative", "Strategic"],
    company_suffixes: &["Group", "Inc", "Corporation", "Company"],
    job_titles: &["General Manager", "VP of Operations", "Head of Strategy"],
    opening_lines: &[
        "I noticed your role as {title} at {company} and your experience in the {focus_area} sector really caught my attention.",
        "I've been following {company}'s work in {focus_area} and was impressed by what you've built as {title}.",
        "As {title} at {company}, you're likely thinking about how {role_phrase} can get more out of {focus_area} this year.",
    ],
    resource_description: None,
    focus_options: &[],
    role_options: &[],
};

pub(super) const INDUSTRIES: &[BuiltinIndustry] = &[
    BuiltinIndustry {
        name: "Technology & Software",
        company_prefixes: &["Cloud", "Data", "Cyber", "Quantum", "Nexus", "Byte"],
        company_suffixes: &["Labs", "Systems", "Technologies", "Software", "Networks"],
        job_titles: &[
            "CTO",
            "VP of Engineering",
            "Head of Product",
            "Engineering Manager",
            "Chief Information Officer",
        ],
        opening_lines: &[
            "I came across {company} while researching {focus_area} teams, and your work as {title} stood out.",
            "Scaling {focus_area} platforms is hard, and it looks like {company} is doing it well under your leadership as {title}.",
            "I've been speaking with {role_phrase} about how they modernize their {focus_area} stack, and {company} kept coming up.",
        ],
        resource_description: Some(
            "a short case study on how {focus_area} teams cut release cycles in half, which I think would resonate at {company}",
        ),
        focus_options: &[
            "Enterprise",
            "SaaS",
            "Cybersecurity",
            "Cloud Infrastructure",
            "AI/ML",
        ],
        role_options: &["CTO/CIO", "VP of Engineering", "Product Manager", "DevOps Lead"],
    },
    BuiltinIndustry {
        name: "Healthcare & Life Sciences",
        company_prefixes: &["Vital", "Care", "Bio", "Medi", "Life", "Cura"],
        company_suffixes: &["Health", "Medical", "Therapeutics", "Clinics", "Sciences"],
        job_titles: &[
            "Chief Medical Officer",
            "Hospital Administrator",
            "Director of Patient Services",
            "Head of Clinical Operations",
        ],
        opening_lines: &[
            "I noticed {company}'s commitment to patient outcomes in {focus_area}, and your role as {title} caught my eye.",
            "Healthcare leaders in {focus_area} are under real pressure to do more with less, and {company} seems to be handling it well.",
            "I've been working with {role_phrase} in {focus_area} on reducing administrative load, and I thought of {company}.",
        ],
        resource_description: Some(
            "a brief on how {focus_area} providers are reducing administrative overhead, with a few ideas specific to {company}",
        ),
        focus_options: &["Hospitals", "Telehealth", "Pharmaceuticals", "Medical Devices"],
        role_options: &["Chief Medical Officer", "Practice Manager", "Clinical Director"],
    },
    BuiltinIndustry {
        name: "Financial Services",
        company_prefixes: &["Meridian", "Summit", "Harbor", "Crest", "Sterling", "Ledger"],
        company_suffixes: &["Partners", "Financial", "Capital", "Advisors", "Holdings"],
        job_titles: &[
            "CFO",
            "Chief Risk Officer",
            "Head of Wealth Management",
            "Director of Compliance",
        ],
        opening_lines: &[
            "I've been following how {company} approaches {focus_area}, and your perspective as {title} would be valuable to hear.",
            "With regulation in {focus_area} tightening, I imagine {company} has a full plate this quarter.",
            "A number of {role_phrase} in {focus_area} have shared similar challenges with me, and {company} came to mind.",
        ],
        resource_description: Some(
            "our latest compliance benchmark for {focus_area} firms, including a few takeaways for {company}",
        ),
        focus_options: &["Banking", "Insurance", "Wealth Management", "Fintech"],
        role_options: &["CFO", "Compliance Officer", "Portfolio Manager"],
    },
    BuiltinIndustry {
        name: "Manufacturing",
        company_prefixes: &["Precision", "Forge", "Apex", "Iron", "Titan", "Allied"],
        company_suffixes: &["Industries", "Manufacturing", "Works", "Fabrication", "Components"],
        job_titles: &[
            "Plant Manager",
            "VP of Manufacturing",
            "Director of Supply Chain",
            "Head of Quality",
        ],
        opening_lines: &[
            "I noticed {company}'s growth in {focus_area}, and as {title} you're probably juggling throughput and cost every day.",
            "Operational efficiency in {focus_area} is a topic I spend a lot of time on, and {company} looks like a great example.",
            "I've helped {role_phrase} in {focus_area} tighten their production planning, and I thought of {company}.",
        ],
        resource_description: Some(
            "a throughput analysis from a recent {focus_area} engagement that maps closely to {company}",
        ),
        focus_options: &["Automotive", "Aerospace", "Industrial Equipment", "Consumer Goods"],
        role_options: &["Plant Manager", "Operations Director", "Supply Chain Manager"],
    },
    BuiltinIndustry {
        name: "Retail & E-commerce",
        company_prefixes: &["Urban", "Market", "Bright", "Cart", "Trend", "Shop"],
        company_suffixes: &["Outfitters", "Retail", "Brands", "Commerce", "Goods"],
        job_titles: &[
            "Head of E-commerce",
            "Chief Marketing Officer",
            "Director of Merchandising",
            "VP of Retail Operations",
        ],
        opening_lines: &[
            "I've been a fan of how {company} shows up in {focus_area}, and your role as {title} caught my attention.",
            "Customer expectations in {focus_area} keep rising, and {company} seems to be keeping pace.",
            "I've been talking with {role_phrase} in {focus_area} about conversion and retention, and {company} came up.",
        ],
        resource_description: Some(
            "a short playbook on lifting repeat purchases in {focus_area}, with notes on where {company} could apply it",
        ),
        focus_options: &["Fashion", "Consumer Electronics", "Grocery", "Direct-to-Consumer"],
        role_options: &["CMO", "E-commerce Manager", "Merchandising Director"],
    },
    BuiltinIndustry {
        name: "Real Estate",
        company_prefixes: &["Keystone", "Landmark", "Horizon", "Cornerstone", "Metro", "Oak"],
        company_suffixes: &["Properties", "Realty", "Developments", "Estates", "Group"],
        job_titles: &[
            "Broker",
            "Property Manager",
            "Director of Acquisitions",
            "Head of Leasing",
        ],
        opening_lines: &[
            "I noticed {company}'s portfolio in {focus_area}, and your work as {title} really stood out.",
            "The {focus_area} market has shifted a lot this year, and {company} seems well positioned.",
            "I've been helping {role_phrase} in {focus_area} streamline deal flow, and {company} came to mind.",
        ],
        resource_description: Some(
            "a market snapshot for {focus_area} that I put together with firms like {company} in mind",
        ),
        focus_options: &["Commercial", "Residential", "Property Management", "Development"],
        role_options: &["Broker", "Property Manager", "Asset Manager"],
    },
    BuiltinIndustry {
        name: "Professional Services",
        company_prefixes: &["Pinnacle", "Clearview", "Bridge", "Insight", "Northstar", "Vertex"],
        company_suffixes: &["Consulting", "Advisory", "Partners", "Associates", "Solutions"],
        job_titles: &[
            "Managing Partner",
            "Principal Consultant",
            "Director of Client Services",
            "Head of Business Development",
        ],
        opening_lines: &[
            "I came across {company} while looking at leading {focus_area} firms, and your role as {title} stood out.",
            "Utilization and client growth in {focus_area} are always a balancing act, and {company} seems to manage it well.",
            "I've been working with {role_phrase} at {focus_area} firms on winning more repeat business, and I thought of {company}.",
        ],
        resource_description: Some(
            "a short guide on improving utilization at {focus_area} firms, with a few ideas tailored to {company}",
        ),
        focus_options: &["Management Consulting", "Legal", "Accounting", "Marketing Agencies"],
        role_options: &["Managing Partner", "Practice Lead", "Business Development Director"],
    },
    BuiltinIndustry {
        name: "Education",
        company_prefixes: &["Bright", "Scholar", "Learn", "Beacon", "Pathway", "Summit"],
        company_suffixes: &["Learning", "Education", "Academy", "Institute", "Schools"],
        job_titles: &[
            "Superintendent",
            "Dean",
            "Director of Admissions",
            "Head of Learning Technology",
        ],
        opening_lines: &[
            "I noticed {company}'s work in {focus_area}, and your role as {title} caught my attention.",
            "Student engagement in {focus_area} has changed a lot recently, and {company} seems to be leading the way.",
            "I've been supporting {role_phrase} in {focus_area} with enrollment and retention, and {company} came to mind.",
        ],
        resource_description: Some(
            "a few enrollment insights from {focus_area} institutions that I think would be useful for {company}",
        ),
        focus_options: &["K-12", "Higher Education", "EdTech", "Corporate Training"],
        role_options: &["Dean", "Admissions Director", "IT Director"],
    },
];
