use html_escape::encode_text;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::server::{error::Error, model::auth::IdentityClaims};

/// Serializes `value` as JSON indented with four spaces.
pub fn pretty_json<T: Serialize>(value: &T) -> Result<String, Error> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;

    String::from_utf8(buf).map_err(|e| Error::ParseError(e.to_string()))
}

/// Renders the home page for the current session's user, if any.
pub fn render_home(user: Option<&IdentityClaims>) -> Result<String, Error> {
    let pretty = pretty_json(&user)?;

    let greeting = match user {
        Some(claims) => format!(
            "<h1>Welcome {}!</h1>\n    <p><a href=\"/logout\" id=\"qsLogoutBtn\">Logout</a></p>",
            encode_text(claims.display_name())
        ),
        None => "<h1>Welcome Guest</h1>\n    <p><a href=\"/login\" id=\"qsLoginBtn\">Login</a></p>"
            .to_string(),
    };

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <title>SSO Portal</title>
  </head>
  <body>
    {greeting}
    <p><a href="/protected">Protected page</a></p>
    <div><pre>{pretty}</pre></div>
  </body>
</html>
"#,
        greeting = greeting,
        pretty = encode_text(&pretty),
    ))
}
