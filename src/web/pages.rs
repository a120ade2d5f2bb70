// SPDX-License-Identifier: MIT

//! HTML page rendering.
//!
//! Pages are built with small string builders; every user-supplied value
//! goes through [`escape`] first.

use crate::models::{ActivityView, UserView};
use crate::reference;

/// Escape a value for embedding in HTML text or attributes.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Shared page chrome.
fn layout(title: &str, me: Option<&UserView>, body: &str) -> String {
    let nav = match me {
        Some(user) => format!(
            r#"<span class="me"><a href="/u/{}">{}</a></span> <a href="/logout">Log out</a>"#,
            user.id,
            escape(&user.display_name)
        ),
        None => r#"<a href="/login">Log in with Google</a>"#.to_string(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} - coffeelog</title>
<style>
body {{ font-family: sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }}
nav {{ display: flex; justify-content: space-between; border-bottom: 1px solid #ccc; padding-bottom: .5rem; }}
.activity {{ border: 1px solid #eee; padding: .75rem; margin: .75rem 0; }}
.activity img {{ max-width: 20rem; }}
label {{ display: block; margin-top: .5rem; }}
</style>
</head>
<body>
<nav><a href="/">coffeelog</a> <span>{nav}</span></nav>
{body}
</body>
</html>
"#,
        title = escape(title),
        nav = nav,
        body = body
    )
}

fn drink_options() -> String {
    let group = |label: &str, espresso_based: bool| {
        let options: String = reference::DRINKS
            .iter()
            .filter(|drink| drink.espresso_based == espresso_based)
            .map(|drink| format!(r#"<option value="{0}">{0}</option>"#, escape(drink.name)))
            .collect();
        format!(r#"<optgroup label="{}">{}</optgroup>"#, label, options)
    };

    format!("{}{}", group("Espresso-based", true), group("Other", false))
}

fn method_options() -> String {
    reference::BREW_METHODS
        .iter()
        .map(|method| {
            format!(
                r#"<option value="{0}" data-icon="{1}">{0}</option>"#,
                escape(method.name),
                escape(method.icon)
            )
        })
        .collect()
}

fn origin_options() -> String {
    reference::ORIGIN_REGIONS
        .iter()
        .map(|region| {
            let countries: String = region
                .countries
                .iter()
                .map(|country| format!(r#"<option value="{0}">{0}</option>"#, escape(country)))
                .collect();
            format!(
                r#"<optgroup label="{}">{}</optgroup>"#,
                escape(region.name),
                countries
            )
        })
        .collect()
}

/// Home page: logging form when signed in, login prompt otherwise.
pub fn home(me: Option<&UserView>) -> String {
    let body = match me {
        Some(_) => format!(
            r#"<h1>Log a coffee</h1>
<form action="/coffee" method="post" enctype="multipart/form-data">
<label>Drink <select name="drink">{drinks}</select></label>
<label>Brew method <select name="brew-method">{methods}</select></label>
<label>Amount <input type="number" name="amount" min="0">
<select name="amount_unit"><option value="oz">oz</option><option value="shots">shots</option></select></label>
<label>Roaster <input type="text" name="roaster" autocomplete="off"></label>
<label>Origin <select name="origin">{origins}</select></label>
<label><input type="checkbox" name="homebrew"> Homebrew</label>
<label>Notes <textarea name="notes"></textarea></label>
<label>Photo <input type="file" name="picture" accept="image/*"></label>
<button type="submit">Log it</button>
</form>"#,
            drinks = drink_options(),
            methods = method_options(),
            origins = origin_options(),
        ),
        None => r#"<h1>coffeelog</h1>
<p>Keep track of the coffee you drink. <a href="/login">Log in with Google</a> to get started.</p>"#
            .to_string(),
    };

    layout("Home", me, &body)
}

fn activity_card(activity: &ActivityView) -> String {
    let amount = if activity.amount.n > 0 {
        format!("{} {}", activity.amount.n, activity.amount.unit.label())
    } else {
        String::new()
    };

    let picture = match &activity.picture_url {
        Some(url) => format!(r#"<p><img src="{}" alt="photo"></p>"#, escape(url)),
        None => String::new(),
    };

    let notes = if activity.notes.is_empty() {
        String::new()
    } else {
        format!("<p>{}</p>", escape(&activity.notes))
    };

    format!(
        r#"<div class="activity">
<p><a href="/a/{id}"><strong>{drink}</strong></a> via {method}{homebrew} · <a href="/u/{user_id}">{user}</a></p>
<p>{roaster} · {origin} · {date} {amount}</p>
{notes}{picture}
</div>"#,
        id = activity.id,
        drink = escape(&activity.drink),
        method = escape(&activity.method),
        homebrew = if activity.homebrew { " (homebrew)" } else { "" },
        user_id = activity.user.id,
        user = escape(&activity.user.display_name),
        roaster = escape(&activity.roaster.name),
        origin = escape(&activity.origin),
        date = escape(&activity.date),
        amount = amount,
        notes = notes,
        picture = picture,
    )
}

/// Single activity page.
pub fn activity(me: Option<&UserView>, activity: &ActivityView) -> String {
    let body = format!(
        "<h1>{}</h1>\n{}",
        escape(&activity.drink),
        activity_card(activity)
    );
    layout("Activity", me, &body)
}

/// User profile page with the activity log, newest first.
pub fn profile(me: Option<&UserView>, user: &UserView, activities: &[ActivityView]) -> String {
    let picture = match &user.picture {
        Some(url) => format!(r#"<img src="{}" alt="" width="48"> "#, escape(url)),
        None => String::new(),
    };

    let log: String = if activities.is_empty() {
        "<p>No coffee logged yet.</p>".to_string()
    } else {
        activities.iter().map(activity_card).collect()
    };

    let body = format!(
        "<h1>{}{}</h1>\n{}",
        picture,
        escape(&user.display_name),
        log
    );
    layout(&user.display_name, me, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CaffeineUnit, DrinkAmount, RoasterRef};

    fn user(name: &str) -> UserView {
        UserView {
            id: 7,
            display_name: name.to_string(),
            picture: None,
        }
    }

    fn view() -> ActivityView {
        ActivityView {
            id: 11,
            user: user("Ada"),
            date: "2024-03-01T09:00:00+00:00".to_string(),
            log_date: "2024-03-01T09:01:00+00:00".to_string(),
            drink: "Cortado".to_string(),
            method: "Espresso".to_string(),
            homebrew: false,
            origin: "Kenya".to_string(),
            roaster: RoasterRef {
                id: 3,
                name: "Chemex Roasters".to_string(),
            },
            amount: DrinkAmount {
                n: 2,
                unit: CaffeineUnit::Shots,
            },
            notes: String::new(),
            picture_url: None,
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>&"quoted"'</b>"#),
            "&lt;b&gt;&amp;&quot;quoted&quot;&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_home_anonymous_has_login_link() {
        let html = home(None);
        assert!(html.contains(r#"href="/login""#));
        assert!(!html.contains("form action"));
    }

    #[test]
    fn test_home_signed_in_has_form() {
        let me = user("Ada");
        let html = home(Some(&me));
        assert!(html.contains(r#"action="/coffee""#));
        assert!(html.contains(r#"<optgroup label="Espresso-based">"#));
        assert!(html.contains("Chemex"));
        assert!(html.contains("Kenya"));
    }

    #[test]
    fn test_profile_escapes_display_name() {
        let me = user("<script>alert(1)</script>");
        let html = profile(None, &me, &[]);
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_activity_page_links_owner() {
        let html = activity(None, &view());
        assert!(html.contains(r#"href="/u/7""#));
        assert!(html.contains("2 shots"));
    }
}
