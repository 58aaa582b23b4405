pub fn get_css() -> String {
    String::from("* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

body {
    font-family: 'Inter', -apple-system, sans-serif;
    background: #10141a;
    color: #e4e8ee;
    line-height: 1.6;
}

.container {
    max-width: 720px;
    margin: 0 auto;
    padding: 3rem 1.5rem;
}

header {
    text-align: center;
    margin-bottom: 2.5rem;
}

header h1 {
    font-size: 1.8rem;
    font-weight: 600;
}

header p {
    color: #8b95a5;
}

.section {
    background: #1a2029;
    border: 1px solid #2a3342;
    border-radius: 8px;
    padding: 1.5rem;
    margin-bottom: 1.5rem;
}

.section h2 {
    font-size: 1.1rem;
    margin-bottom: 0.8rem;
}

.headers {
    list-style: none;
}

.headers li {
    padding: 0.3rem 0;
}

code {
    background: #10141a;
    border-radius: 4px;
    padding: 0.15rem 0.4rem;
    font-size: 0.85rem;
    color: #7dd3a0;
}

footer {
    text-align: center;
    color: #8b95a5;
    font-size: 0.85rem;
}
")
}
