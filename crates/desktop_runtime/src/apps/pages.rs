//! Static page content rendered through the typewriter for the informational apps.

use crate::content::{ContentNode, StyleTag};

fn section(children: Vec<ContentNode>) -> ContentNode {
    ContentNode::styled(StyleTag::Section, children)
}

fn paragraph(text: &str) -> ContentNode {
    ContentNode::styled(StyleTag::Paragraph, vec![ContentNode::text(text)])
}

fn heading(text: &str) -> ContentNode {
    ContentNode::styled(StyleTag::Heading, vec![ContentNode::text(text)])
}

fn title(text: &str) -> ContentNode {
    ContentNode::styled(StyleTag::Title, vec![ContentNode::text(text)])
}

fn link_item(href: &str, label: &str) -> ContentNode {
    ContentNode::styled(StyleTag::ListItem, vec![ContentNode::link(href, label)])
}

pub fn about_page() -> ContentNode {
    ContentNode::group(vec![
        section(vec![
            title("About"),
            ContentNode::styled(
                StyleTag::Subtitle,
                vec![ContentNode::text("Product builder")],
            ),
        ]),
        section(vec![paragraph(
            "Welcome to this desktop. Icons can be dragged around, windows can be moved, \
             resized and maximized, and the notepad and sketchpad keep their contents in \
             this browser between visits.",
        )]),
        section(vec![
            heading("Links"),
            ContentNode::styled(
                StyleTag::List,
                vec![
                    link_item("https://github.com/", "GitHub"),
                    link_item("https://www.linkedin.com/", "LinkedIn"),
                    link_item("mailto:hello@example.com", "Email"),
                ],
            ),
        ]),
    ])
}

pub fn projects_page() -> ContentNode {
    ContentNode::group(vec![
        title("Projects"),
        section(vec![
            heading("Workout tracker"),
            paragraph(
                "A mobile app for logging workouts with as few taps as possible, while keeping \
                 enough history to show progress over time.",
            ),
            ContentNode::link("https://apps.apple.com/", "App Store Link"),
        ]),
    ])
}

pub fn app_info_page() -> ContentNode {
    ContentNode::group(vec![
        title("App Info"),
        section(vec![paragraph(
            "A workout tracking app available on the App Store.",
        )]),
        section(vec![
            heading("Privacy Policy"),
            ContentNode::styled(
                StyleTag::Paragraph,
                vec![ContentNode::link("/privacy", "View Privacy Policy")],
            ),
        ]),
        section(vec![
            heading("Contact"),
            ContentNode::styled(
                StyleTag::Paragraph,
                vec![
                    ContentNode::text("For questions, contact: "),
                    ContentNode::link("mailto:hello@example.com", "hello@example.com"),
                ],
            ),
        ]),
    ])
}
