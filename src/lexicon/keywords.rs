//! Document-type and product-type trigger phrases.
//!
//! Both tables are scanned top to bottom and the first label with a matching
//! phrase wins, so the row order is part of the classification contract.

/// Label returned when no document type matches.
pub const OTHER_DOCUMENT_TYPE: &str = "Other Type";
/// Label returned when no product type matches and no drug term was found.
pub const OTHER_PRODUCT_TYPE: &str = "Other";
/// Product label assigned from drug-term evidence after every other type failed.
pub const DRUG_PRODUCT: &str = "Drug Product";

pub(crate) const DOCUMENT_TYPES: &[(&str, &[&str])] = &[
    ("Announcement", &["announcement", "notification", "bulletin"]),
    ("Expert Report", &["expert report", "technical report", "scientific opinion"]),
    ("Amendment", &["amendment", "regulation change", "regulatory update"]),
    ("Law", &["law", "legislation", "statute", "act"]),
    ("Directive", &["directive", "guideline", "policy"]),
    ("Order", &["order", "decision", "ruling", "decree"]),
    ("Information Note", &["information note", "information bulletin", "notice"]),
    ("Q&A", &["questions and answers", "q&a", "faq", "frequently asked"]),
    ("Instructions", &["instructions", "manual", "guidance", "procedure"]),
    ("Resolution", &["resolution", "conclusion", "determination"]),
    ("Consultation", &["consultation", "public hearing", "stakeholder input"]),
    ("Product Info", &["product information", "package leaflet", "product update"]),
    ("Regulatory Decision", &["regulatory decision", "approval summary", "assessment"]),
    ("Evaluation", &["evaluation report", "assessment report", "review report"]),
    ("Recommendation", &["recommendation", "advice", "suggestion"]),
    ("Checklist", &["checklist", "verification list", "review points"]),
    ("Approval Tracker", &["approval tracker", "authorization status", "timeline"]),
    ("CHMP Opinion", &["chmp opinion", "committee opinion", "scientific opinion"]),
    ("Committee", &["committee", "working group", "task force"]),
    ("CV", &["curriculum vitae", "cv", "resume"]),
    ("EPAR", &["epar", "european public assessment report"]),
    ("Letter", &["letter", "correspondence", "official communication"]),
    ("Meeting", &["meeting", "conference", "session"]),
    ("Withdrawal", &["withdrawn application", "cancelled submission"]),
    ("Communication", &["communication", "announcement", "message"]),
    ("Decree", &["decree", "royal decree", "official order"]),
    ("Form", &["form", "application form", "submission form"]),
    ("Regulatory History", &["regulatory history", "dossier history", "timeline"]),
    ("Press Release", &["press release", "news release", "media statement"]),
    ("Ordinance", &["ordinance", "local regulation", "municipal law"]),
    ("Advisory Committee", &["advisory committee", "committee profile"]),
    ("Voting", &["voting", "committee vote", "decision outcome"]),
    ("Petition", &["citizen petition", "public petition", "request"]),
    ("Federal Register", &["federal register", "official gazette", "journal"]),
    ("Inspection", &["inspection report", "audit report", "site visit"]),
    ("SOP", &["sop", "standard procedure", "operating protocol"]),
    ("BLA Approval", &["bla", "biologics license application"]),
    ("BLA Supplement", &["supplemental bla", "bla amendment"]),
    ("NDA Supplement", &["supplemental nda", "nda amendment"]),
    ("510(k)", &["510(k)", "premarket notification"]),
    ("NDA Approval", &["nda", "new drug application"]),
];

pub(crate) const PRODUCT_TYPES: &[(&str, &[&str])] = &[
    (
        "Biological",
        &[
            "biological",
            "biologic",
            "monoclonal antibody",
            "mab",
            "recombinant",
            "cell therapy",
            "gene therapy",
            "blood product",
            "plasma derived",
            "therapeutic protein",
            "insulin",
            "erythropoietin",
            "immunoglobulin",
            "stem cell",
        ],
    ),
    (
        "Drug Substance",
        &[
            "drug substance",
            "active substance",
            "api",
            "active ingredient",
            "bulk drug",
            "chemical entity",
            "reference standard",
        ],
    ),
    (
        "Vaccine",
        &[
            "vaccine",
            "vaccination",
            "immunization",
            "antigen",
            "adjuvant",
            "mmr",
            "dtap",
            "hpv",
            "influenza",
            "covid-19",
            "sars-cov-2",
        ],
    ),
    (
        "Small Molecule",
        &[
            "small molecule",
            "chemical drug",
            "synthetic",
            "organic compound",
            "nme",
            "new molecular entity",
            "low molecular weight",
        ],
    ),
    (
        "Medical Device",
        &[
            "medical device",
            "implant",
            "stent",
            "catheter",
            "prosthesis",
            "pacemaker",
            "defibrillator",
            "surgical instrument",
        ],
    ),
    (
        "IVD",
        &[
            "ivd",
            "in vitro diagnostic",
            "diagnostic test",
            "assay",
            "reagent",
            "test kit",
            "analyzer",
            "rapid test",
        ],
    ),
];
