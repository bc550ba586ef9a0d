//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

//! Minimal HTML building blocks shared by the administrative pages.
//!
//! Every piece of caller-provided text goes through [`escape`] before being
//! interpolated into markup.

use std::fmt::Write;

use itertools::Itertools;

use crate::SelectOptions;

// Form field carrying the anti-forgery token.
pub const CSRF_FIELD: &str = "__csrf_magic";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BoxClass {
    Info,
    Success,
    Warning,
    Danger,
}

// Tab entry: label, active flag, link target.
pub type Tab<'a> = (&'a str, bool, &'a str);

// ===== global functions =====

// Neutralizes the characters that are significant in HTML markup.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            c => escaped.push(c),
        }
    }
    escaped
}

// Uppercases the first character of every space-separated word.
pub fn ucwords(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .join(" ")
}

// Page header: document preamble and breadcrumb title.
pub fn head(title: &[&str]) -> String {
    let breadcrumb = title.iter().map(|part| escape(part)).join(" / ");
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"utf-8\">\n<title>{breadcrumb}</title>\n</head>\n\
         <body>\n<div class=\"container\">\n\
         <h1 class=\"breadcrumb\">{breadcrumb}</h1>\n"
    )
}

// Page footer.
pub fn foot() -> String {
    "</div>\n</body>\n</html>\n".to_owned()
}

pub fn info_box(message: &str, class: BoxClass, dismissible: bool) -> String {
    let class = match class {
        BoxClass::Info => "info",
        BoxClass::Success => "success",
        BoxClass::Warning => "warning",
        BoxClass::Danger => "danger",
    };
    let close = if dismissible {
        "<button type=\"button\" class=\"close\" data-dismiss=\"alert\">\
         &times;</button>"
    } else {
        ""
    };
    format!(
        "<div class=\"alert alert-{class}\" role=\"alert\">{close}{}</div>\n",
        escape(message)
    )
}

// Error list shown above a form.
pub fn input_errors<T: std::fmt::Display>(errors: &[T]) -> String {
    let mut html = String::from(
        "<div class=\"input-errors alert alert-danger\">\n\
         <p>The following input errors were detected:</p>\n<ul>\n",
    );
    for error in errors {
        let _ = writeln!(html, "<li>{}</li>", escape(&error.to_string()));
    }
    html.push_str("</ul>\n</div>\n");
    html
}

// Result of applying saved changes to the running system.
pub fn apply_result_box(retval: i32) -> String {
    if retval == 0 {
        info_box("The changes have been applied successfully.", BoxClass::Success, true)
    } else {
        info_box(
            &format!(
                "There was a problem applying the changes (status {retval}). \
                 See the system log for details."
            ),
            BoxClass::Danger,
            true,
        )
    }
}

pub fn top_tabs(tabs: &[Tab<'_>]) -> String {
    let mut html = String::from("<ul class=\"nav nav-pills\">\n");
    for (label, active, target) in tabs {
        let class = if *active { " class=\"active\"" } else { "" };
        let _ = writeln!(
            html,
            "<li{class}><a href=\"{}\">{}</a></li>",
            escape(target),
            escape(label)
        );
    }
    html.push_str("</ul>\n");
    html
}

pub fn hidden(name: &str, value: &str) -> String {
    format!(
        "<input type=\"hidden\" name=\"{}\" value=\"{}\">\n",
        escape(name),
        escape(value)
    )
}

pub fn checkbox(name: &str, title: &str, description: &str, checked: bool) -> String {
    let checked = if checked { " checked" } else { "" };
    format!(
        "<div class=\"form-group\">\n<label class=\"control-label\">{}</label>\n\
         <label><input type=\"checkbox\" name=\"{}\" value=\"yes\"{checked}> {}\
         </label>\n</div>\n",
        escape(title),
        escape(name),
        escape(description)
    )
}

pub fn select(
    name: &str,
    title: &str,
    selected: &[String],
    options: &SelectOptions,
    multiple: bool,
    help: Option<&str>,
) -> String {
    let (field, multiple) = match multiple {
        true => (format!("{name}[]"), " multiple"),
        false => (name.to_owned(), ""),
    };
    let mut html = format!(
        "<div class=\"form-group\">\n<label class=\"control-label\">{}</label>\n\
         <select name=\"{}\" class=\"form-control\"{multiple}>\n",
        escape(title),
        escape(&field)
    );
    for (value, label) in options {
        let sel = if selected.contains(value) { " selected" } else { "" };
        let _ = writeln!(
            html,
            "<option value=\"{}\"{sel}>{}</option>",
            escape(value),
            escape(label)
        );
    }
    html.push_str("</select>\n");
    if let Some(help) = help {
        let _ = writeln!(html, "<span class=\"help-block\">{}</span>", escape(help));
    }
    html.push_str("</div>\n");
    html
}

pub fn text_input(
    name: &str,
    title: &str,
    value: &str,
    help: Option<&str>,
) -> String {
    let mut html = format!(
        "<div class=\"form-group\">\n<label class=\"control-label\">{}</label>\n\
         <input type=\"text\" class=\"form-control\" name=\"{}\" value=\"{}\">\n",
        escape(title),
        escape(name),
        escape(value)
    );
    if let Some(help) = help {
        let _ = writeln!(html, "<span class=\"help-block\">{}</span>", escape(help));
    }
    html.push_str("</div>\n");
    html
}

pub fn form_open(action: &str, csrf_token: &str) -> String {
    format!(
        "<form method=\"post\" action=\"{}\">\n{}",
        escape(action),
        hidden(CSRF_FIELD, csrf_token)
    )
}

pub fn form_close() -> String {
    "<button type=\"submit\" name=\"save\" class=\"btn btn-primary\" \
     value=\"Save\">Save</button>\n</form>\n"
        .to_owned()
}
