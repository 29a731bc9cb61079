//! Prints rendered views to stdout.

use colored::Colorize;
use jadarat_application::LocaleResolver;
use jadarat_application::dashboard::DashboardView;
use jadarat_application::forms::{FieldView, FormHeader, LinkView, LoginView, SignupView};
use jadarat_application::settings_editor::{
    InputView, NoticeKind, SectionBody, SettingFieldView, SettingsView,
};
use jadarat_core::locale::Direction;

fn header(header: &FormHeader) {
    println!("{}  {}", header.app_name.bold(), direction_tag(header.direction));
    println!("{}", header.title.bold());
    println!("{}", header.description.dimmed());
    println!();
}

fn direction_tag(direction: Direction) -> String {
    match direction {
        Direction::Ltr => "[ltr]".dimmed().to_string(),
        Direction::Rtl => "[rtl]".dimmed().to_string(),
    }
}

fn field(field: &FieldView) {
    let value = if field.secret {
        "•".repeat(field.value.chars().count())
    } else if field.value.is_empty() {
        field.placeholder.clone().unwrap_or_default().dimmed().to_string()
    } else {
        field.value.clone()
    };
    println!("  {:<20} {}", field.label, value);
}

fn error(message: Option<&str>) {
    if let Some(message) = message {
        println!("{} {}", "✗".red().bold(), message.red());
        println!();
    }
}

fn link(link: &LinkView) {
    match &link.prompt {
        Some(prompt) => println!("{} {} ({})", prompt, link.label.cyan(), link.path),
        None => println!("{} ({})", link.label.cyan(), link.path),
    }
}

pub fn login(view: &LoginView) {
    header(&view.header);
    error(view.error.as_deref());
    field(&view.email);
    field(&view.password);
    println!();
    println!("[ {} ]", view.submit_label.bold());
    link(&view.footer);
}

pub fn signed_in(locale: &LocaleResolver, path: &str) {
    println!("{} {} → {}", "✓".green().bold(), locale.translate("login.signedIn"), path);
}

pub fn locked(locale: &LocaleResolver, from: &str) {
    println!(
        "{} {} ({})",
        "🔒".yellow(),
        locale.translate("login.required").yellow(),
        from
    );
}

pub fn signup(view: &SignupView) {
    match view {
        SignupView::Form(form) => {
            header(&form.header);
            error(form.error.as_deref());
            for f in [
                &form.first_name,
                &form.last_name,
                &form.email,
                &form.password,
                &form.confirm_password,
            ] {
                field(f);
            }
            println!();
            println!("[ {} ]", form.submit_label.bold());
            link(&form.footer);
        }
        SignupView::Confirmation(confirmation) => {
            println!("{}", "✓".green().bold());
            header(&confirmation.header);
            link(&confirmation.login_link);
        }
    }
}

pub fn dashboard(view: &DashboardView) {
    println!("{}  {}", view.title.bold(), direction_tag(view.direction));
    println!("{}", view.subtitle.dimmed());
    println!();

    for stat in &view.stats {
        println!(
            "  {:<24} {:>10}  {}",
            stat.label,
            stat.value.bold(),
            stat.caption.dimmed()
        );
    }
    println!();

    println!("{}", view.quick_actions_title.bold());
    println!("  {}", view.quick_actions_body.dimmed());
    println!();

    println!("{}", view.health_title.bold());
    for badge in &view.health {
        println!("  {:<24} {}", badge.label, badge.status.green());
    }
    println!();

    let recent = &view.recent;
    println!("{}  {}", recent.title.bold(), recent.view_all.label.cyan());
    if let Some(message) = &recent.empty_message {
        println!("  {}", message.dimmed());
        return;
    }

    let [name, tier, status, created] = &recent.columns;
    println!(
        "  {:<28} {:<16} {:<12} {}",
        name.underline(),
        tier.underline(),
        status.underline(),
        created.underline()
    );
    for row in &recent.rows {
        let status = if row.is_active {
            row.status.green()
        } else {
            row.status.yellow()
        };
        println!(
            "  {:<28} {:<16} {:<12} {}",
            row.name,
            row.tier,
            status,
            row.created.dimmed()
        );
    }
}

fn setting_field(field: &SettingFieldView) {
    let value = match &field.input {
        InputView::Text { value } => value.clone(),
        InputView::Number { value } => value.to_string(),
        InputView::Select { options } => options
            .iter()
            .find(|option| option.selected)
            .map(|option| option.label.clone())
            .unwrap_or_default(),
        InputView::Toggle { on, label } => {
            if *on {
                label.green().to_string()
            } else {
                label.dimmed().to_string()
            }
        }
    };
    println!(
        "  {:<36} {}  {}",
        field.label,
        value,
        format!("({})", field.key).dimmed()
    );
    if let Some(description) = &field.description {
        println!("    {}", description.dimmed());
    }
}

pub fn settings(view: &SettingsView) {
    println!("{}  {}", view.title.bold(), direction_tag(view.direction));
    println!("{}", view.subtitle.dimmed());
    println!();

    if let Some(notice) = &view.notice {
        match notice.kind {
            NoticeKind::Success => println!("{} {}", "✓".green().bold(), notice.message.green()),
            NoticeKind::Error => println!("{} {}", "✗".red().bold(), notice.message.red()),
        }
        println!();
    }

    for section in &view.sections {
        println!("{}", section.title.bold());
        println!("{}", section.description.dimmed());
        match &section.body {
            SectionBody::Fields(fields) => fields.iter().for_each(setting_field),
            SectionBody::Localization(localization) => {
                for language in &localization.languages {
                    println!(
                        "  {:<36} {}  {}",
                        language.name,
                        language.badge.cyan(),
                        language.direction_label.dimmed()
                    );
                }
                println!("  {}", localization.regional_format_title);
                for line in &localization.regional_format {
                    println!("    {}", line.dimmed());
                }
            }
            SectionBody::Integrations(integrations) => {
                for integration in integrations {
                    println!(
                        "  {:<36} {:<20} {}",
                        integration.name,
                        integration.provider,
                        integration.status.green()
                    );
                }
            }
        }
        println!();
    }

    println!("[ {} ]", view.save_label.bold());
}
