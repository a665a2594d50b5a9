//! src/routes/landing/render.rs

use htmlescape::encode_minimal as escape;

use crate::content::{self, Testimonial};
use crate::domain::{ContactForm, FormStatus, ValidationError};

const STYLESHEET: &str = include_str!("landing.css");
const SUBMIT_SCRIPT: &str = include_str!("contact.js");

pub fn render_page(form: &ContactForm) -> String {
    let mut page = String::with_capacity(24 * 1024);

    page.push_str(&format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{brand} | Therapeutic Art Sessions</title>
<style>{style}</style>
</head>
<body>
"#,
        brand = escape(content::BRAND),
        style = STYLESHEET,
    ));

    page.push_str(&header());
    page.push_str("<main>\n");
    page.push_str(&hero());
    page.push_str(&pain_points());
    page.push_str(&about());
    page.push_str(&services());
    page.push_str(&benefits());
    page.push_str(&testimonials());
    page.push_str(&gallery());
    page.push_str(&contact_section(form));
    page.push_str("</main>\n");
    page.push_str(&footer());
    page.push_str(&format!("<script>{}</script>\n</body>\n</html>\n", SUBMIT_SCRIPT));

    page
}

fn header() -> String {
    let navigation: String = content::NAVIGATION
        .iter()
        .map(|link| format!(r##"<a href="#{}">{}</a>"##, link.anchor, escape(link.label)))
        .collect();

    format!(
        r##"<header class="site-header">
<a href="#home" class="logo"><img src="{logo}" alt="{brand}"></a>
<nav>{navigation}</nav>
<div class="social">{social}</div>
</header>
"##,
        logo = content::LOGO_URL,
        brand = escape(content::BRAND),
        navigation = navigation,
        social = social_links(),
    )
}

fn social_links() -> String {
    content::SOCIAL_LINKS
        .iter()
        .map(|link| {
            format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                link.url,
                escape(link.label)
            )
        })
        .collect()
}

fn hero() -> String {
    let hero = &content::HERO;
    format!(
        r##"<section id="home" class="hero">
<div>
<h1>{headline} <span class="highlight">{highlight}</span></h1>
<p class="lead">{lead}</p>
<a class="button" href="#contact">{cta}</a>
</div>
<img src="{image}" alt="{alt}">
</section>
"##,
        headline = escape(hero.headline),
        highlight = escape(hero.highlight),
        lead = escape(hero.lead),
        cta = escape(hero.call_to_action),
        image = hero.image_url,
        alt = escape(hero.image_alt),
    )
}

fn pain_points() -> String {
    let items: String = content::PAIN_POINTS
        .iter()
        .map(|point| format!("<li>{}</li>", escape(point)))
        .collect();

    format!(
        "<section class=\"pain-points\">\n<h2>{}</h2>\n<ul>{}</ul>\n</section>\n",
        escape(content::PAIN_POINTS_TITLE),
        items
    )
}

fn about() -> String {
    let about = &content::ABOUT;
    let paragraphs: String = about
        .paragraphs
        .iter()
        .map(|p| format!("<p>{}</p>", escape(p)))
        .collect();

    format!(
        r##"<section id="about" class="about">
<img src="{image}" alt="{alt}">
<div>
<h2>{title}</h2>
{paragraphs}
<a class="button" href="#contact">{cta} &rarr;</a>
</div>
</section>
"##,
        image = about.image_url,
        alt = escape(about.image_alt),
        title = escape(about.title),
        paragraphs = paragraphs,
        cta = escape(about.call_to_action),
    )
}

fn services() -> String {
    let cards: String = content::SERVICES
        .iter()
        .map(|service| {
            let tags: String = service
                .tags
                .iter()
                .map(|tag| format!(r#"<span class="tag">{}</span>"#, escape(tag)))
                .collect();
            format!(
                r##"<article class="card">
<img src="{image}" alt="{title}">
<h3>{title}</h3>
<div class="tags">{tags}</div>
<p>{description}</p>
<a href="#learn-more">{link}</a>
</article>
"##,
                image = service.image_url,
                title = escape(service.title),
                tags = tags,
                description = escape(service.description),
                link = escape(service.link_label),
            )
        })
        .collect();

    format!(
        "<section id=\"services\" class=\"services\">\n<h2>{}</h2>\n<div class=\"grid\">\n{}</div>\n</section>\n",
        escape(content::SERVICES_TITLE),
        cards
    )
}

fn benefits() -> String {
    let cards: String = content::BENEFITS
        .iter()
        .map(|benefit| {
            format!(
                "<article class=\"card\">\n<img src=\"{image}\" alt=\"{title}\">\n<h3>{title}</h3>\n<p>{description}</p>\n</article>\n",
                image = benefit.image_url,
                title = escape(benefit.title),
                description = escape(benefit.description),
            )
        })
        .collect();

    format!(
        r##"<section class="benefits">
<h2>{title}</h2>
<div class="grid">
{cards}</div>
<a class="button" href="#contact">{cta}</a>
</section>
"##,
        title = escape(content::BENEFITS_TITLE),
        cards = cards,
        cta = escape(content::BENEFITS_CALL_TO_ACTION),
    )
}

fn portrait(testimonial: &Testimonial) -> String {
    match testimonial.image_url {
        Some(url) => format!(
            r#"<img class="portrait" src="{}" alt="{}">"#,
            url,
            escape(testimonial.name)
        ),
        None => format!(
            r#"<span class="portrait initials">{}</span>"#,
            escape(&testimonial.initials())
        ),
    }
}

fn testimonials() -> String {
    let quotes: String = content::TESTIMONIALS
        .iter()
        .map(|testimonial| {
            format!(
                "<figure class=\"card\">\n{portrait}\n<figcaption><strong>{name}</strong> <span>{role}</span></figcaption>\n<blockquote>&ldquo;{quote}&rdquo;</blockquote>\n</figure>\n",
                portrait = portrait(testimonial),
                name = escape(testimonial.name),
                role = escape(testimonial.role),
                quote = escape(testimonial.quote),
            )
        })
        .collect();

    format!(
        "<section id=\"testimonials\" class=\"testimonials\">\n<h2>{}</h2>\n<div class=\"grid\">\n{}</div>\n</section>\n",
        escape(content::TESTIMONIALS_TITLE),
        quotes
    )
}

fn gallery() -> String {
    let images: String = content::GALLERY
        .iter()
        .enumerate()
        .map(|(i, url)| format!(r#"<img src="{}" alt="Mindful art creation {}">"#, url, i + 1))
        .collect();

    format!(
        r##"<section class="gallery">
<h2>{title}</h2>
<div class="grid">{images}</div>
<blockquote class="closing">&ldquo;{quote}&rdquo;</blockquote>
<p>{attribution}</p>
<a class="button" href="#contact">{cta}</a>
</section>
"##,
        title = escape(content::GALLERY_TITLE),
        images = images,
        quote = escape(content::CLOSING_QUOTE),
        attribution = escape(content::CLOSING_ATTRIBUTION),
        cta = escape(content::CLOSING_CALL_TO_ACTION),
    )
}

fn field_error(error: Option<ValidationError>) -> String {
    match error {
        Some(e) => format!(
            r#"<p class="field-error" role="alert">{}</p>"#,
            escape(&e.to_string())
        ),
        None => String::new(),
    }
}

fn invalid_class(error: Option<ValidationError>) -> &'static str {
    if error.is_some() {
        r#" class="invalid" aria-invalid="true""#
    } else {
        ""
    }
}

fn banner(form: &ContactForm) -> String {
    let kind = match form.status() {
        FormStatus::Success => "success",
        FormStatus::Failure => "failure",
        FormStatus::Idle | FormStatus::Submitting => return String::new(),
    };
    match form.banner() {
        Some(message) => format!(
            r#"<div class="banner banner-{}" role="status">{}</div>"#,
            kind,
            escape(message)
        ),
        None => String::new(),
    }
}

fn submit_button(form: &ContactForm) -> &'static str {
    if form.is_busy() {
        r#"<button type="submit" disabled aria-busy="true"><span class="spinner"></span>Sending...</button>"#
    } else {
        r#"<button type="submit">Send Message</button>"#
    }
}

fn contact_section(form: &ContactForm) -> String {
    let errors = form.errors();
    format!(
        r##"<section id="contact" class="contact">
<h2>{title}</h2>
<form id="contact-form" method="post" action="/contact#contact" novalidate>
<div class="field">
<label for="name">Name (required)</label>
<input type="text" id="name" name="name" value="{name}" required{name_invalid}>
{name_error}
</div>
<div class="field">
<label for="email">Email (required)</label>
<input type="email" id="email" name="email" value="{email}" required{email_invalid}>
{email_error}
</div>
<div class="field checkbox">
<input type="checkbox" id="newsletter" name="newsletter"{checked}>
<label for="newsletter">Sign up for news and updates</label>
</div>
<div class="field">
<label for="message">Message</label>
<textarea id="message" name="message" rows="5">{message}</textarea>
</div>
{button}
{banner}
</form>
</section>
"##,
        title = escape(content::CONTACT_TITLE),
        name = escape(form.name()),
        name_invalid = invalid_class(errors.name),
        name_error = field_error(errors.name),
        email = escape(form.email()),
        email_invalid = invalid_class(errors.email),
        email_error = field_error(errors.email),
        checked = if form.newsletter() { " checked" } else { "" },
        message = escape(form.message()),
        button = submit_button(form),
        banner = banner(form),
    )
}

fn footer() -> String {
    format!(
        r#"<footer class="site-footer">
<img src="{logo}" alt="{brand}">
<div class="social">{social}</div>
<p>{note}</p>
</footer>
"#,
        logo = content::FOOTER_LOGO_URL,
        brand = escape(content::BRAND),
        social = social_links(),
        note = escape(content::FOOTER_NOTE),
    )
}
