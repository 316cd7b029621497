// ABOUTME: Built-in demo data for every page
// Fresh copies on each call; pages own and mutate their copy

use chrono::NaiveDate;

use super::{
    AccountSettings, Achievement, Buyer, BuyerStatus, BusinessProfile, ChatMessage, Conversation,
    Document, DocumentCategory, Language, Match, MatchRequest, MatchStatus, OwnerProfile, Priority,
    Task, TaskStatus, Timezone,
};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    // Literal calendar dates below are all valid
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn buyers() -> Vec<Buyer> {
    vec![
        Buyer {
            id: 1,
            name: "Sarah Chen".into(),
            company: Some("TechVentures LLC".into()),
            budget_range: "$1M - $5M".into(),
            industries: strings(&["Technology", "SaaS", "E-commerce"]),
            location: "San Francisco, CA".into(),
            timeline: "Immediate (0-3 months)".into(),
            status: BuyerStatus::ReadyToBuy,
            bio: Some("Serial entrepreneur looking to acquire profitable SaaS businesses with strong recurring revenue. Focus on B2B tools and automation platforms.".into()),
            previous_acquisitions: 3,
            experience: "10+ years".into(),
        },
        Buyer {
            id: 2,
            name: "Michael Rodriguez".into(),
            company: Some("Rodriguez Capital".into()),
            budget_range: "$500K - $1M".into(),
            industries: strings(&["Manufacturing", "Healthcare", "Professional Services"]),
            location: "Austin, TX".into(),
            timeline: "Short-term (3-6 months)".into(),
            status: BuyerStatus::ResearchPhase,
            bio: Some("Private equity professional seeking manufacturing businesses with strong operational fundamentals and growth potential.".into()),
            previous_acquisitions: 5,
            experience: "15+ years".into(),
        },
        Buyer {
            id: 3,
            name: "Emily Park".into(),
            company: Some("Park Industries".into()),
            budget_range: "$5M - $10M".into(),
            industries: strings(&["Retail", "Hospitality", "Food & Beverage"]),
            location: "New York, NY".into(),
            timeline: "Medium-term (6-12 months)".into(),
            status: BuyerStatus::ActiveNegotiations,
            bio: Some("Family office looking for established retail and hospitality businesses with proven track records and expansion opportunities.".into()),
            previous_acquisitions: 2,
            experience: "8+ years".into(),
        },
        Buyer {
            id: 4,
            name: "David Thompson".into(),
            company: None,
            budget_range: "$10M+".into(),
            industries: strings(&["Real Estate", "Construction", "Transportation"]),
            location: "Miami, FL".into(),
            timeline: "Long-term (12+ months)".into(),
            status: BuyerStatus::ReadyToBuy,
            bio: Some("Real estate mogul expanding into adjacent industries. Interested in infrastructure and logistics companies.".into()),
            previous_acquisitions: 8,
            experience: "20+ years".into(),
        },
    ]
}

pub fn matches() -> Vec<Match> {
    vec![
        Match {
            id: 1,
            name: "Sarah Chen".into(),
            company: "TechVentures LLC".into(),
            match_date: day(2024, 1, 15),
            status: MatchStatus::Active,
            initials: "SC".into(),
            last_message: "I'd like to schedule a call to discuss...".into(),
            message_time: "2 hours ago".into(),
        },
        Match {
            id: 2,
            name: "Michael Rodriguez".into(),
            company: "Rodriguez Capital".into(),
            match_date: day(2024, 1, 12),
            status: MatchStatus::Active,
            initials: "MR".into(),
            last_message: "The financial documents look promising...".into(),
            message_time: "1 day ago".into(),
        },
        Match {
            id: 3,
            name: "Emily Park".into(),
            company: "Park Industries".into(),
            match_date: day(2024, 1, 10),
            status: MatchStatus::PendingResponse,
            initials: "EP".into(),
            last_message: "Thank you for connecting with me...".into(),
            message_time: "3 days ago".into(),
        },
    ]
}

pub fn match_requests() -> Vec<MatchRequest> {
    vec![MatchRequest {
        id: 4,
        name: "David Thompson".into(),
        company: "Thompson Holdings".into(),
        initials: "DT".into(),
        budget_range: "$10M+".into(),
        industries: strings(&["Real Estate", "Construction"]),
    }]
}

pub fn conversations() -> Vec<Conversation> {
    vec![
        Conversation {
            id: 1,
            name: "Sarah Chen".into(),
            company: "TechVentures LLC".into(),
            last_message: "I'd like to discuss the valuation details further...".into(),
            time: "2 min ago".into(),
            unread: 2,
            initials: "SC".into(),
        },
        Conversation {
            id: 2,
            name: "Michael Rodriguez".into(),
            company: "Rodriguez Capital".into(),
            last_message: "The financial documents look promising...".into(),
            time: "1 hour ago".into(),
            unread: 0,
            initials: "MR".into(),
        },
        Conversation {
            id: 3,
            name: "Emily Park".into(),
            company: "Park Industries".into(),
            last_message: "Can we schedule a call this week?".into(),
            time: "Yesterday".into(),
            unread: 1,
            initials: "EP".into(),
        },
    ]
}

/// Thread shown for the selected conversation
pub fn thread() -> Vec<ChatMessage> {
    vec![
        ChatMessage {
            id: 1,
            sender: "Sarah Chen".into(),
            body: "Hi! I'm very interested in learning more about your business. The revenue projections look solid.".into(),
            time: "10:30 AM".into(),
            is_own: false,
        },
        ChatMessage {
            id: 2,
            sender: "You".into(),
            body: "Thank you for your interest! I'd be happy to provide more details. When would be a good time for a call?".into(),
            time: "10:45 AM".into(),
            is_own: true,
        },
        ChatMessage {
            id: 3,
            sender: "Sarah Chen".into(),
            body: "I'd like to discuss the valuation details further. Are you available tomorrow afternoon?".into(),
            time: "2:15 PM".into(),
            is_own: false,
        },
    ]
}

pub fn tasks() -> Vec<Task> {
    let task = |id: u32,
                title: &str,
                description: &str,
                priority: Priority,
                status: TaskStatus,
                due_date: NaiveDate,
                category: &str| Task {
        id,
        title: title.into(),
        description: description.into(),
        priority,
        status,
        due_date,
        assignee: "You".into(),
        category: category.into(),
        completed: status == TaskStatus::Completed,
    };

    vec![
        task(
            1,
            "Review financial statements from Sarah Chen",
            "Analyze Q4 2023 financial documents and prepare summary",
            Priority::High,
            TaskStatus::Pending,
            day(2024, 1, 20),
            "Due Diligence",
        ),
        task(
            2,
            "Schedule valuation call with Michael Rodriguez",
            "Coordinate availability for business valuation discussion",
            Priority::Medium,
            TaskStatus::InProgress,
            day(2024, 1, 18),
            "Communication",
        ),
        task(
            3,
            "Upload updated business plan",
            "Provide latest version of business plan to data room",
            Priority::High,
            TaskStatus::Completed,
            day(2024, 1, 15),
            "Documentation",
        ),
        task(
            4,
            "Sign NDA with Emily Park",
            "Review and execute non-disclosure agreement",
            Priority::Medium,
            TaskStatus::Pending,
            day(2024, 1, 22),
            "Legal",
        ),
        task(
            5,
            "Prepare market analysis presentation",
            "Create comprehensive market analysis for potential buyers",
            Priority::Low,
            TaskStatus::Overdue,
            day(2024, 1, 14),
            "Documentation",
        ),
    ]
}

pub fn documents() -> Vec<Document> {
    let document = |id: u32,
                    name: &str,
                    file_type: &str,
                    size_kb: u32,
                    category: DocumentCategory,
                    upload_date: NaiveDate,
                    status: &str,
                    shared: bool| Document {
        id,
        name: name.into(),
        file_type: file_type.into(),
        size_kb,
        category,
        upload_date,
        status: status.into(),
        shared,
    };

    vec![
        document(
            1,
            "Financial Statements 2023",
            "PDF",
            2400,
            DocumentCategory::Financial,
            day(2024, 1, 15),
            "Verified",
            true,
        ),
        document(
            2,
            "Business Plan Executive Summary",
            "PDF",
            1800,
            DocumentCategory::BusinessPlans,
            day(2024, 1, 14),
            "Pending Review",
            false,
        ),
        document(
            3,
            "Non-Disclosure Agreement Template",
            "DOCX",
            156,
            DocumentCategory::Legal,
            day(2024, 1, 12),
            "Template",
            false,
        ),
        document(
            4,
            "Tax Returns 2022-2023",
            "PDF",
            3200,
            DocumentCategory::Financial,
            day(2024, 1, 10),
            "Confidential",
            true,
        ),
        document(
            5,
            "Market Analysis Report",
            "PDF",
            4100,
            DocumentCategory::DueDiligence,
            day(2024, 1, 8),
            "Verified",
            false,
        ),
    ]
}

pub fn business_profile() -> BusinessProfile {
    BusinessProfile {
        name: "TechFlow Solutions".into(),
        industry: "Technology".into(),
        founded: "2018".into(),
        employees: "25-50".into(),
        location: "Austin, TX".into(),
        revenue: "$2.5M ARR".into(),
        asking_price: "$8M - $12M".into(),
        description: "Leading SaaS platform for workflow automation, serving 500+ enterprise clients with 95% retention rate.".into(),
        tags: strings(&["SaaS", "B2B"]),
        financial_highlights: vec![
            ("$2.5M".into(), "Annual Recurring Revenue".into()),
            ("35%".into(), "Profit Margin".into()),
            ("95%".into(), "Customer Retention".into()),
        ],
        competitive_advantages: strings(&[
            "Patent-pending automation technology",
            "Exclusive partnerships with major enterprises",
            "Best-in-class customer retention rates",
            "Scalable SaaS platform with proven ROI",
        ]),
        growth_opportunities: strings(&[
            "Expansion into European markets",
            "AI-powered feature development",
            "Strategic acquisition opportunities",
            "Enterprise customer base growth",
        ]),
    }
}

pub fn owner_profile() -> OwnerProfile {
    OwnerProfile {
        name: "John Doe".into(),
        title: "CEO & Founder".into(),
        experience: "15+ years".into(),
        previous_exits: 2,
        education: "MBA from Stanford".into(),
    }
}

pub fn achievements() -> Vec<Achievement> {
    [
        ("300% Revenue Growth", "Last 3 Years"),
        ("4.8/5 Customer Rating", "500+ Reviews"),
        ("Industry Recognition", "Best SaaS 2023"),
    ]
    .into_iter()
    .map(|(label, value)| Achievement {
        label: label.into(),
        value: value.into(),
    })
    .collect()
}

pub fn account_settings() -> AccountSettings {
    AccountSettings {
        first_name: "John".into(),
        last_name: "Doe".into(),
        email: "john.doe@example.com".into(),
        phone: "+1 (555) 123-4567".into(),
        email_notifications: true,
        new_match_alerts: true,
        message_notifications: true,
        deal_updates: true,
        profile_visibility: true,
        language: Language::EnglishUs,
        timezone: Timezone::Eastern,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_counts() {
        assert_eq!(buyers().len(), 4);
        assert_eq!(matches().len(), 3);
        assert_eq!(match_requests().len(), 1);
        assert_eq!(conversations().len(), 3);
        assert_eq!(thread().len(), 3);
        assert_eq!(tasks().len(), 5);
        assert_eq!(documents().len(), 5);
    }

    #[test]
    fn test_only_completed_task_is_flagged_completed() {
        let completed: Vec<_> = tasks().into_iter().filter(|t| t.completed).map(|t| t.id).collect();
        assert_eq!(completed, [3]);
    }

    #[test]
    fn test_buyers_serialize_for_cli_output() {
        let json = serde_json::to_value(&buyers()[3]).unwrap();
        assert_eq!(json["name"], "David Thompson");
        assert!(json["company"].is_null());
        assert_eq!(json["status"], "Ready to Buy");
        assert_eq!(json["previousAcquisitions"], 8);
    }
}
