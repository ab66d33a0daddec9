//! Reference Data
//!
//! Read-only catalogues: mandatory task templates per nationality, quick links,
//! degree programmes, campus locations and the community seed content.

use chrono::{DateTime, TimeZone, Utc};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::models::{
    CampusLocation, Comment, Discussion, DiscussionReply, Nationality, QuickLink, Sentiment, Task,
    TaskCategory,
};

// ========================
// Task Templates
// ========================

/// Template row: (id, title, description, category, link, due date, nationalities)
type TaskTemplate = (
    &'static str,
    &'static str,
    &'static str,
    TaskCategory,
    Option<&'static str>,
    Option<&'static str>,
    &'static [Nationality],
);

use Nationality::{Eu, NonEu, Usa};

const TASK_TEMPLATES: &[TaskTemplate] = &[
    (
        "mandatory-registration",
        "Complete online registration",
        "Register for your programme and modules through the student portal.",
        TaskCategory::Registration,
        Some("https://www.universityofgalway.ie/registration/"),
        Some("Before the start of semester"),
        &[Eu, NonEu, Usa],
    ),
    (
        "mandatory-student-card",
        "Collect your student ID card",
        "Bring photo ID to the Student Services desk once registration is complete.",
        TaskCategory::Registration,
        None,
        None,
        &[Eu, NonEu, Usa],
    ),
    (
        "mandatory-fees-eu",
        "Pay the student contribution",
        "Pay the student contribution charge or confirm your SUSI grant.",
        TaskCategory::Fees,
        Some("https://www.universityofgalway.ie/fees-and-finance/"),
        Some("Before registration closes"),
        &[Eu],
    ),
    (
        "mandatory-fees-international",
        "Pay international tuition fees",
        "Pay the first instalment of your non-EU tuition fees.",
        TaskCategory::Fees,
        Some("https://www.universityofgalway.ie/fees-and-finance/"),
        Some("Before registration closes"),
        &[NonEu, Usa],
    ),
    (
        "mandatory-insurance",
        "Arrange private medical insurance",
        "Immigration requires proof of private medical insurance for your stay.",
        TaskCategory::Fees,
        None,
        Some("Before your IRP appointment"),
        &[NonEu, Usa],
    ),
    (
        "mandatory-irp",
        "Register for your IRP",
        "Book an Irish Residence Permit appointment with Immigration Service Delivery.",
        TaskCategory::Irp,
        Some("https://www.irishimmigration.ie/registering-your-immigration-permission/"),
        Some("Within 90 days of arrival"),
        &[NonEu, Usa],
    ),
    (
        "mandatory-accommodation",
        "Secure accommodation",
        "Confirm on-campus or private accommodation and sign your lease.",
        TaskCategory::Accommodation,
        Some("https://www.universityofgalway.ie/accommodation/"),
        None,
        &[Eu, NonEu, Usa],
    ),
    (
        "mandatory-bank",
        "Open an Irish bank account",
        "A local account makes rent and part-time salary payments easier.",
        TaskCategory::Bank,
        None,
        None,
        &[Eu, NonEu, Usa],
    ),
    (
        "mandatory-pps",
        "Apply for a PPS number",
        "Needed to work in Ireland and to access public services.",
        TaskCategory::Pps,
        Some("https://www.gov.ie/en/service/12e6ee-get-a-personal-public-service-pps-number/"),
        Some("Within 90 days of arrival"),
        &[Eu, NonEu, Usa],
    ),
];

/// Mandatory tasks for a nationality, in checklist order
pub fn tasks_for_nationality(nationality: Nationality) -> Vec<Task> {
    TASK_TEMPLATES
        .iter()
        .filter(|t| t.6.contains(&nationality))
        .map(|&(id, title, description, category, link, due_date, nationalities)| Task {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            category,
            is_mandatory: true,
            is_completed: false,
            applicable_nationalities: nationalities.to_vec(),
            link: link.map(str::to_string),
            due_date: due_date.map(str::to_string),
        })
        .collect()
}

// ========================
// Quick Links & Degrees
// ========================

pub const QUICK_LINKS: &[QuickLink] = &[
    QuickLink {
        id: "canvas",
        title: "Canvas",
        description: "Course materials, assignments and grades",
        url: "https://universityofgalway.instructure.com/",
        icon: "GraduationCap",
    },
    QuickLink {
        id: "registration",
        title: "Student Registration",
        description: "Register for modules and manage your student record",
        url: "https://www.universityofgalway.ie/registration/",
        icon: "ClipboardCheck",
    },
    QuickLink {
        id: "international",
        title: "International Affairs",
        description: "Visa, immigration and support for international students",
        url: "https://www.universityofgalway.ie/international-students/",
        icon: "Globe",
    },
    QuickLink {
        id: "fees",
        title: "Fees Office",
        description: "Tuition fees, payment plans and receipts",
        url: "https://www.universityofgalway.ie/fees-and-finance/",
        icon: "CreditCard",
    },
    QuickLink {
        id: "careers",
        title: "Career Development Centre",
        description: "Part-time jobs, CV clinics and graduate opportunities",
        url: "https://www.universityofgalway.ie/career-development-centre/",
        icon: "Briefcase",
    },
    QuickLink {
        id: "societies",
        title: "Societies",
        description: "Join one of over 100 student societies",
        url: "https://socs.universityofgalway.ie/",
        icon: "Users",
    },
    QuickLink {
        id: "library",
        title: "James Hardiman Library",
        description: "Search the catalogue and book study rooms",
        url: "https://library.universityofgalway.ie/",
        icon: "BookOpen",
    },
    QuickLink {
        id: "accommodation",
        title: "Accommodation Office",
        description: "On-campus residences and private rental advice",
        url: "https://www.universityofgalway.ie/accommodation/",
        icon: "Home",
    },
];

/// Emoji for a quick link icon key
pub fn quick_link_emoji(icon: &str) -> &'static str {
    match icon {
        "GraduationCap" => "🎓",
        "ClipboardCheck" => "📋",
        "Globe" => "🌍",
        "CreditCard" => "💳",
        "Briefcase" => "💼",
        "Users" => "👥",
        "BookOpen" => "📖",
        "Home" => "🏠",
        _ => "🔗",
    }
}

pub const DEGREES: &[&str] = &[
    "BA Arts",
    "BComm Commerce",
    "BE Civil Engineering",
    "BE Electronic & Computer Engineering",
    "BSc Computer Science & Information Technology",
    "BSc Biomedical Science",
    "LLB Law",
    "MB BCh BAO Medicine",
    "MSc Computer Science (Data Analytics)",
    "MSc Software Engineering & Database Technologies",
    "MA Journalism",
    "PhD Research",
];

// ========================
// Campus Map
// ========================

pub const CAMPUS_MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d2385.8!2d-9.0612!3d53.2786!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x485b96f5d7c51c07%3A0x8e3a3b3b3b3b3b3b!2sUniversity%20of%20Galway!5e0!3m2!1sen!2sie!4v1704067200000!5m2!1sen!2sie";
pub const CAMPUS_MAP_PLACE_URL: &str = "https://www.google.com/maps/place/University+of+Galway";
pub const CAMPUS_DIRECTIONS_URL: &str =
    "https://www.google.com/maps/dir/?api=1&destination=University+of+Galway";

pub const CAMPUS_LOCATIONS: &[CampusLocation] = &[
    CampusLocation { name: "Main Campus", coords: "53.2786,-9.0591", kind: "Campus" },
    CampusLocation { name: "James Hardiman Library", coords: "53.2782,-9.0612", kind: "Library" },
    CampusLocation { name: "Student Services", coords: "53.2779,-9.0588", kind: "Services" },
    CampusLocation {
        name: "Áras na Mac Léinn (Student Union)",
        coords: "53.2773,-9.0595",
        kind: "Student Life",
    },
    CampusLocation { name: "Sports Centre", coords: "53.2795,-9.0555", kind: "Sports" },
    CampusLocation { name: "Engineering Building", coords: "53.2799,-9.0577", kind: "Academic" },
    CampusLocation { name: "Arts/Science Building", coords: "53.2775,-9.0605", kind: "Academic" },
    CampusLocation { name: "Bailey Allen Hall", coords: "53.2770,-9.0590", kind: "Events" },
];

/// Maps search link for a location
pub fn location_search_url(location: &CampusLocation) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        utf8_percent_encode(location.coords, NON_ALPHANUMERIC)
    )
}

// ========================
// Community Seed Content
// ========================

fn seed_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Comments present in a fresh store
pub fn seed_comments() -> Vec<Comment> {
    vec![
        Comment {
            id: "1".to_string(),
            user_id: "demo1".to_string(),
            user_name: "Maria Santos".to_string(),
            user_avatar: None,
            content: "The IRP registration process was smoother than expected! Book early morning slots.".to_string(),
            category: TaskCategory::Irp,
            sentiment: Sentiment::Positive,
            created_at: seed_date(2024, 1, 15),
            likes: 12,
        },
        Comment {
            id: "2".to_string(),
            user_id: "demo2".to_string(),
            user_name: "James Chen".to_string(),
            user_avatar: None,
            content: "Make sure to bring all original documents for registration. They won't accept copies!".to_string(),
            category: TaskCategory::Registration,
            sentiment: Sentiment::Neutral,
            created_at: seed_date(2024, 1, 10),
            likes: 8,
        },
        Comment {
            id: "3".to_string(),
            user_id: "demo3".to_string(),
            user_name: "Emma Wilson".to_string(),
            user_avatar: None,
            content: "Setting up my bank account took only 30 minutes at AIB. Very helpful staff!".to_string(),
            category: TaskCategory::Bank,
            sentiment: Sentiment::Positive,
            created_at: seed_date(2024, 1, 8),
            likes: 15,
        },
    ]
}

/// Discussions present in a fresh store
pub fn seed_discussions() -> Vec<Discussion> {
    vec![Discussion {
        id: "1".to_string(),
        user_id: "demo1".to_string(),
        user_name: "Maria Santos".to_string(),
        user_avatar: None,
        title: "Best accommodation areas near campus?".to_string(),
        content: "Hi everyone! I'm looking for accommodation recommendations near the university. What areas would you suggest for international students?".to_string(),
        category: "accommodation".to_string(),
        created_at: seed_date(2024, 1, 12),
        replies: vec![DiscussionReply {
            id: "1-1".to_string(),
            user_id: "demo2".to_string(),
            user_name: "James Chen".to_string(),
            user_avatar: None,
            content: "I'd recommend the area around Newcastle or Salthill. Both have good bus connections to campus.".to_string(),
            created_at: seed_date(2024, 1, 12),
        }],
    }]
}
