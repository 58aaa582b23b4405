/// Fixed header set appended to every response regardless of method, path,
/// or status. The CSP permits inline scripts/styles and the Google Fonts
/// origins the served pages rely on.
pub const SECURITY_HEADERS: &[(&str, &str)] = &[
    ("X-Content-Type-Options", "nosniff"),
    ("X-Frame-Options", "DENY"),
    ("X-XSS-Protection", "1; mode=block"),
    ("Referrer-Policy", "strict-origin-when-cross-origin"),
    (
        "Content-Security-Policy",
        "default-src 'self'; \
         script-src 'self' 'unsafe-inline'; \
         style-src 'self' 'unsafe-inline' https://fonts.googleapis.com; \
         font-src 'self' https://fonts.gstatic.com; \
         img-src 'self' data:; \
         connect-src 'self';",
    ),
];

/// The header set as CRLF-terminated lines, ready to splice into a
/// response head.
pub fn header_block() -> String {
    let mut block = String::new();
    for (name, value) in SECURITY_HEADERS {
        block.push_str(name);
        block.push_str(": ");
        block.push_str(value);
        block.push_str("\r\n");
    }
    block
}
