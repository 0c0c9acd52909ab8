use crate::{
    email::outbound::OutboundEmail,
    entities::{
        commission::Commission, contact::Contact, newsletter::NewsletterSubscription,
        testimonial::Testimonial,
    },
    utils::sanitize::escape_text,
};

fn layout(heading: &str, body: &str, footer: &str) -> String {
    format!(
        concat!(
            "<html><body style=\"background-color:#f6f9fc;font-family:sans-serif\">",
            "<div style=\"background:#ffffff;margin:0 auto;padding:20px;max-width:600px\">",
            "<h1 style=\"color:#333\">{}</h1><hr/>{}<hr/>",
            "<p style=\"color:#8898aa;font-size:12px\">{}</p>",
            "</div></body></html>"
        ),
        escape_text(heading),
        body,
        escape_text(footer)
    )
}

fn row(label: &str, value: &str) -> String {
    format!("<p><strong>{}:</strong> {}</p>", escape_text(label), escape_text(value))
}

/// Operator notification for a contact-form message; replies go to the sender.
pub fn contact_inquiry(contact: &Contact, operator: &str) -> OutboundEmail {
    let mut body = row("Name", &contact.name);
    body.push_str(&format!(
        "<p><strong>Email:</strong> <a href=\"mailto:{0}\">{0}</a></p>",
        escape_text(&contact.email)
    ));
    if let Some(phone) = &contact.phone {
        body.push_str(&row("Phone", phone));
    }
    body.push_str(&format!("<h3>Message</h3><p>{}</p>", escape_text(&contact.message)));

    let mut text = format!("Name: {}\nEmail: {}\n", contact.name, contact.email);
    if let Some(phone) = &contact.phone {
        text.push_str(&format!("Phone: {}\n", phone));
    }
    text.push_str(&format!("\n{}\n", contact.message));

    OutboundEmail {
        to: vec![operator.to_string()],
        reply_to: Some(contact.email.clone()),
        subject: format!("New Art Commission Inquiry from {}", contact.name),
        html: layout(
            "New Art Commission Inquiry",
            &body,
            "This message was sent from your art portfolio contact form.",
        ),
        text,
    }
}

/// Operator notification asking for a new testimonial to be reviewed.
pub fn testimonial_review(testimonial: &Testimonial, operator: &str) -> OutboundEmail {
    let mut body = row("Name", &testimonial.name);
    body.push_str(&row("Email", &testimonial.email));
    body.push_str(&row("Rating", &format!("{} / 5", testimonial.rating)));
    if let Some(kind) = testimonial.artwork_type {
        body.push_str(&row("Artwork type", kind.as_str()));
    }
    if let Some(recommend) = testimonial.would_recommend {
        body.push_str(&row("Would recommend", if recommend { "Yes" } else { "No" }));
    }
    body.push_str(&format!("<h3>Testimonial</h3><p>{}</p>", escape_text(&testimonial.message)));

    OutboundEmail {
        to: vec![operator.to_string()],
        reply_to: Some(testimonial.email.clone()),
        subject: format!("New testimonial from {} awaiting review", testimonial.name),
        html: layout(
            "New Testimonial Submitted",
            &body,
            "Approve it to show it on the testimonials section.",
        ),
        text: format!(
            "{} ({}) rated {}/5:\n\n{}\n",
            testimonial.name, testimonial.email, testimonial.rating, testimonial.message
        ),
    }
}

/// Confirmation sent to the client who requested a commission.
pub fn commission_confirmation(commission: &Commission) -> OutboundEmail {
    let mut body = format!(
        "<p>Hi {},</p><p>Thank you for your commission request. I'll review the details and get back to you soon.</p>",
        escape_text(&commission.name)
    );
    body.push_str(&row("Service", commission.service_type.as_str()));
    if let Some(budget) = commission.budget {
        body.push_str(&row("Budget", budget.as_str()));
    }
    if let Some(size) = commission.size {
        body.push_str(&row("Size", size.as_str()));
    }
    if let Some(deadline) = commission.deadline {
        body.push_str(&row("Deadline", &deadline.to_string()));
    }
    if !commission.reference_images.is_empty() {
        body.push_str(&row("Reference images", &commission.reference_images.len().to_string()));
    }
    body.push_str(&format!("<h3>Your description</h3><p>{}</p>", escape_text(&commission.description)));

    OutboundEmail {
        to: vec![commission.email.clone()],
        reply_to: None,
        subject: "We received your commission request".to_string(),
        html: layout("Commission Request Received", &body, &format!("Reference: {}", commission.id)),
        text: format!(
            "Hi {},\n\nThank you for your commission request ({}). I'll be in touch soon.\n\nReference: {}\n",
            commission.name,
            commission.service_type,
            commission.id
        ),
    }
}

/// Welcome message for a new newsletter subscriber.
pub fn newsletter_welcome(subscription: &NewsletterSubscription) -> OutboundEmail {
    let body = concat!(
        "<p>Thanks for subscribing!</p>",
        "<p>You'll be the first to hear about new artwork, open commission slots and studio news.</p>"
    );

    OutboundEmail {
        to: vec![subscription.email.clone()],
        reply_to: None,
        subject: "Welcome to the studio newsletter".to_string(),
        html: layout("Welcome!", body, "You can unsubscribe at any time by replying to this email."),
        text: "Thanks for subscribing! You'll be the first to hear about new artwork and open commission slots.\n".to_string(),
    }
}
