pub fn get_html() -> String {
    String::from("<!DOCTYPE html>
<html lang=\"en\">
<head>
    <meta charset=\"UTF-8\">
    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">
    <title>Secure Static Server</title>
    <link rel=\"stylesheet\" href=\"https://fonts.googleapis.com/css2?family=Inter:wght@400;600&display=swap\">
    <link rel=\"stylesheet\" href=\"styles.css\">
</head>
<body>
    <div class=\"container\">
        <header>
            <h1>🔒 Secure Static Server</h1>
            <p>Local development server with hardened response headers</p>
        </header>

        <section class=\"section\">
            <h2>Active security headers</h2>
            <ul class=\"headers\">
                <li><code>X-Content-Type-Options: nosniff</code></li>
                <li><code>X-Frame-Options: DENY</code></li>
                <li><code>X-XSS-Protection: 1; mode=block</code></li>
                <li><code>Referrer-Policy: strict-origin-when-cross-origin</code></li>
                <li><code>Content-Security-Policy: default-src 'self'; …</code></li>
            </ul>
        </section>

        <section class=\"section\">
            <h2>Status</h2>
            <p>Page served at <span id=\"served-at\">…</span></p>
        </section>

        <footer>
            <p>Served from the local filesystem. Press Ctrl+C in the terminal to stop.</p>
        </footer>
    </div>
    <script src=\"script.js\"></script>
</body>
</html>
")
}
