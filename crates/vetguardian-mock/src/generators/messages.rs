//! Inbox threads: system notifications, provider messages, and one reply.

use chrono::{DateTime, Duration, Utc};
use vetguardian_contracts::{
    message::{Message, MessagePriority, SenderRole},
    profile::VeteranProfile,
};

const SYSTEM_SENDER: &str = "VetGuardian System";

/// Messages for the veteran's inbox, newest first.
pub fn generate(profile: &VeteranProfile, now: DateTime<Utc>) -> Vec<Message> {
    let vid = profile.id();
    let veteran = &profile.veteran;
    let provider = &veteran.primary_provider;
    let mut messages = Vec::with_capacity(6);

    let system = [
        (
            "Appointment Reminder",
            format!(
                "This is a reminder that you have an appointment with {} coming up. Please confirm your attendance or reschedule if needed.",
                provider
            ),
        ),
        (
            "Medication Refill Available",
            "Your medication refill is available at the VA pharmacy. Please pick it up at your convenience.".to_string(),
        ),
        (
            "Health Tip of the Week",
            "Stay hydrated! Drinking enough water is essential for managing many chronic health conditions.".to_string(),
        ),
    ];
    for (i, (subject, content)) in (0i64..).zip(system) {
        messages.push(Message {
            id: format!("msg-{}-sys-{}", vid, i),
            sender: SYSTEM_SENDER.to_string(),
            sender_role: SenderRole::System,
            recipient: veteran.name.clone(),
            timestamp: now - Duration::days(i * 2),
            subject: subject.to_string(),
            content,
            is_read: i != 0,
            priority: if i == 0 { MessagePriority::Urgent } else { MessagePriority::Normal },
        });
    }

    let provider_threads = [
        (
            "Follow-up on Last Visit",
            format!(
                "Hello {}, I wanted to follow up on our last appointment. How have you been feeling with the adjusted medication dosage?",
                veteran.first_name()
            ),
        ),
        (
            "Lab Results Discussion",
            "Your recent lab tests show improvement in several areas. Let's discuss these results at your upcoming appointment.".to_string(),
        ),
    ];
    for (i, (subject, content)) in (0i64..).zip(provider_threads) {
        let sent = now - Duration::days(i * 3 + 1);
        messages.push(Message {
            id: format!("msg-{}-prov-{}", vid, i),
            sender: provider.clone(),
            sender_role: SenderRole::Clinician,
            recipient: veteran.name.clone(),
            timestamp: sent,
            subject: subject.to_string(),
            content,
            is_read: i != 0,
            priority: MessagePriority::Normal,
        });

        if i == 1 {
            messages.push(Message {
                id: format!("msg-{}-resp-{}", vid, i),
                sender: veteran.name.clone(),
                sender_role: SenderRole::Veteran,
                recipient: provider.clone(),
                timestamp: sent + Duration::hours(5),
                subject: format!("Re: {}", subject),
                content: "Thank you for letting me know about the lab results. I am looking forward to discussing them during our upcoming appointment.".to_string(),
                is_read: true,
                priority: MessagePriority::Normal,
            });
        }
    }

    messages.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    messages
}
