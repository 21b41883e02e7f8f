// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The three HTML pages the service serves.

/// Team signup form
pub const INDEX: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Ut på bølgene blå</title>
</head>
<body>
    <h1>Lagnavn</h1>
    <form method="POST" action="/">
        <input type="text" name="team" placeholder="Lagnavn" required>
        <button type="submit">Submit</button>
    </form>
</body>
</html>
"#;

/// Success page embedding the rendered kubeconfig
pub fn success(team: &str, kubeconfig: &str) -> String {
    let team = escape(team);
    let kubeconfig = escape(kubeconfig);
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Kubeconfig for {team}</title>
    <style>
        code {{
            border-radius: .5rem;
            overflow-x: auto;
            padding: .25rem;
            background-color: #24292e;
            color: #e1e4e8;
        }}

        pre {{
            border-radius: .5rem;
            overflow-x: auto;
            padding: 1rem;
            background-color: #24292e;
            color: #e1e4e8;
        }}
    </style>
</head>
<body>
    <h1>Kubeconfig for ✨{team}✨</h1>
    <p>
        <ol>
            <li>Opprett en fil som heter <code>config</code></li>
            <li>Lim innholdet nedenfor inn i filen</li>
            <li>Kjør <code>export KUBECONFIG=./config</code> i din terminal</li>
        </ol>

        PS: Hvis du lukker terminalen din må du kjøre <code>export KUBECONFIG=./config</code> på nytt.
    </p>
    <button onclick="copyToClipboard()">Copy Kubeconfig</button>
    <pre id="kubeconfig">{kubeconfig}</pre>
    <a href="/">Back</a>
    <script>
      function copyToClipboard() {{
        const pre = document.getElementById('kubeconfig');
        const text = pre.innerText;
        navigator.clipboard.writeText(text);
      }}
    </script>
</body>
</html>
"#
    )
}

/// Error page naming the team and the failure
pub fn error(team: &str, message: &str) -> String {
    let team = escape(team);
    let message = escape(message);
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Error!</title>
</head>
<body>
    <h1>Skipet ditt sank</h1>
    <p>Klarte ikke å opprette laget {team}: {message}</p>
    <a href="/">Back</a>
</body>
</html>
"#
    )
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_page_embeds_team_and_kubeconfig() {
        let page = success("vikingene", "apiVersion: v1\nkind: Config");

        assert!(page.contains("Kubeconfig for ✨vikingene✨"));
        assert!(page.contains("apiVersion: v1\nkind: Config"));
    }

    #[test]
    fn test_error_page_names_team_and_message() {
        let page = error("vikingene", "namespaces \"vikingene\" already exists");

        assert!(page.contains("Skipet ditt sank"));
        assert!(page.contains("vikingene"));
        assert!(page.contains("already exists"));
    }

    #[test]
    fn test_user_input_is_escaped() {
        let page = error("<script>alert(1)</script>", "err & \"quotes\"");

        assert!(!page.contains("<script>alert(1)</script>"));
        assert!(page.contains("&lt;script&gt;"));
        assert!(page.contains("err &amp; &quot;quotes&quot;"));
    }
}
