pub fn get_js() -> String {
    String::from("document.addEventListener('DOMContentLoaded', () => {
    const servedAt = document.getElementById('served-at');
    if (servedAt) {
        servedAt.textContent = new Date().toLocaleString();
    }
});
")
}
