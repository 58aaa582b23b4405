use log::{debug, error, info, warn};
use std::fs;
use std::io::{BufReader, BufWriter, Read, Write};
use std::net::TcpStream;
use std::path::{Path, PathBuf};

use super::http_status::HttpStatus;
use super::security;

static MIME_TYPES: &[(&str, &str)] = &[
    ("html", "text/html"),
    ("css", "text/css"),
    ("js", "application/javascript"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("svg", "image/svg+xml"),
    ("ico", "image/x-icon"),
    ("json", "application/json"),
    ("txt", "text/plain"),
];

#[derive(Debug, PartialEq)]
pub struct RequestLine {
    pub method: String,
    pub target: String,
    pub version: String,
}

#[derive(Debug, PartialEq)]
enum Resolved {
    File(PathBuf),
    Directory(PathBuf),
    NotFound,
    Forbidden,
}

pub fn handle_client(mut stream: TcpStream, document_root: &Path) {
    let peer_addr = match stream.peer_addr() {
        Ok(addr) => addr.to_string(),
        Err(_) => "unknown".to_string(),
    };

    debug!("Handling request from {}", peer_addr);

    let mut buffer = [0u8; 8192];
    let bytes_read = match stream.read(&mut buffer) {
        Ok(0) => {
            debug!("Connection closed by client {}", peer_addr);
            return;
        }
        Ok(n) => n,
        Err(e) => {
            error!("Error reading from {}: {}", peer_addr, e);
            return;
        }
    };

    let request = String::from_utf8_lossy(&buffer[..bytes_read]);
    let first_line = request.lines().next().unwrap_or("");

    match parse_request_line(first_line) {
        Some(req) => {
            let status = respond(&mut stream, document_root, &req, &peer_addr);
            info!(
                "{} - \"{} {} {}\" {}",
                peer_addr,
                req.method,
                req.target,
                req.version,
                status.code()
            );
        }
        None => {
            let status = send_error(&mut stream, HttpStatus::BadRequest);
            info!("{} - \"{}\" {}", peer_addr, first_line, status.code());
        }
    }
}

fn respond(
    stream: &mut TcpStream,
    document_root: &Path,
    req: &RequestLine,
    peer_addr: &str,
) -> HttpStatus {
    if req.method != "GET" && req.method != "HEAD" {
        warn!("Unsupported method from {}: {}", peer_addr, req.method);
        return send_error(stream, HttpStatus::MethodNotAllowed);
    }

    let is_head = req.method == "HEAD";
    let path = req.target.split('?').next().unwrap_or(&req.target);

    match resolve(document_root, path) {
        Resolved::Forbidden => {
            warn!("Path traversal attempt from {}: {}", peer_addr, path);
            send_error(stream, HttpStatus::Forbidden)
        }
        Resolved::NotFound => {
            info!("File not found for {}: {}", peer_addr, path);
            send_error(stream, HttpStatus::NotFound)
        }
        Resolved::Directory(dir) => send_listing(stream, &dir, path, is_head, peer_addr),
        Resolved::File(file_path) => send_file(stream, &file_path, is_head, peer_addr),
    }
}

/// Standard static-file resolution: a directory serves its `index.html`
/// when present, otherwise a generated listing.
fn resolve(document_root: &Path, path: &str) -> Resolved {
    if path.contains("..") {
        return Resolved::Forbidden;
    }

    let fs_path = document_root.join(path.trim_start_matches('/'));

    if fs_path.is_dir() {
        let index = fs_path.join("index.html");
        if index.is_file() {
            Resolved::File(index)
        } else {
            Resolved::Directory(fs_path)
        }
    } else if fs_path.is_file() {
        Resolved::File(fs_path)
    } else {
        Resolved::NotFound
    }
}

fn send_file(
    stream: &mut TcpStream,
    file_path: &Path,
    is_head: bool,
    peer_addr: &str,
) -> HttpStatus {
    let metadata = match fs::metadata(file_path) {
        Ok(meta) => meta,
        Err(e) => {
            error!("Error getting metadata for {:?}: {}", file_path, e);
            return send_error(stream, HttpStatus::InternalServerError);
        }
    };

    let content_type = content_type_for(file_path);
    let headers = format_headers(HttpStatus::Ok, content_type, metadata.len());

    if is_head {
        if let Err(e) = stream.write_all(headers.as_bytes()) {
            error!("Error sending HEAD response to {}: {}", peer_addr, e);
        }
        return HttpStatus::Ok;
    }

    let file = match fs::File::open(file_path) {
        Ok(file) => file,
        Err(e) => {
            error!("Error opening file {:?} for {}: {}", file_path, peer_addr, e);
            return send_error(stream, HttpStatus::InternalServerError);
        }
    };

    let mut reader = BufReader::new(file);
    let mut writer = BufWriter::new(stream);

    if let Err(e) = writer.write_all(headers.as_bytes()) {
        error!("Error sending headers to {}: {}", peer_addr, e);
        return HttpStatus::Ok;
    }

    let mut buffer = [0u8; 8192];
    loop {
        match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => {
                if let Err(e) = writer.write_all(&buffer[..n]) {
                    error!("Error sending file data to {}: {}", peer_addr, e);
                    break;
                }
            }
            Err(e) => {
                error!("Error reading file for {}: {}", peer_addr, e);
                break;
            }
        }
    }

    if let Err(e) = writer.flush() {
        error!("Error flushing stream for {}: {}", peer_addr, e);
    }

    debug!("Served file to {}: {:?} ({} bytes)", peer_addr, file_path, metadata.len());
    HttpStatus::Ok
}

fn send_listing(
    stream: &mut TcpStream,
    dir: &Path,
    request_path: &str,
    is_head: bool,
    peer_addr: &str,
) -> HttpStatus {
    let body = match directory_listing(dir, request_path) {
        Ok(body) => body,
        Err(e) => {
            error!("Error listing directory {:?}: {}", dir, e);
            return send_error(stream, HttpStatus::InternalServerError);
        }
    };

    let headers = format_headers(HttpStatus::Ok, "text/html", body.len() as u64);

    let result = if is_head {
        stream.write_all(headers.as_bytes())
    } else {
        stream
            .write_all(headers.as_bytes())
            .and_then(|_| stream.write_all(body.as_bytes()))
    };

    if let Err(e) = result {
        error!("Error sending listing to {}: {}", peer_addr, e);
    }

    HttpStatus::Ok
}

fn directory_listing(dir: &Path, request_path: &str) -> std::io::Result<String> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let mut name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type()?.is_dir() {
            name.push('/');
        }
        entries.push(name);
    }
    entries.sort();

    let items: String = entries
        .iter()
        .map(|name| format!("<li><a href=\"{name}\">{name}</a></li>\n"))
        .collect();

    Ok(format!(
        "<!DOCTYPE html>\n<html>\n<head><title>Directory listing for {request_path}</title></head>\n\
         <body>\n<h1>Directory listing for {request_path}</h1>\n<hr>\n<ul>\n{items}</ul>\n<hr>\n</body>\n</html>\n"
    ))
}

fn send_error(stream: &mut TcpStream, status: HttpStatus) -> HttpStatus {
    let body = format!(
        "<html><body><h1>{} {}</h1></body></html>",
        status.code(),
        status.text()
    );
    let response = format!(
        "{}{}",
        format_headers(status, "text/html", body.len() as u64),
        body
    );

    if let Err(e) = stream.write_all(response.as_bytes()) {
        error!("Error sending response: {}", e);
    }

    status
}

/// The single response-head formatter; every response path goes through it
/// so the security header set rides on every status.
fn format_headers(status: HttpStatus, content_type: &str, content_length: u64) -> String {
    format!(
        "{}Content-Type: {}\r\nContent-Length: {}\r\n{}Connection: close\r\n\r\n",
        status.as_response_line(),
        content_type,
        content_length,
        security::header_block()
    )
}

fn parse_request_line(line: &str) -> Option<RequestLine> {
    let mut parts = line.split_whitespace();
    let method = parts.next()?;
    let target = parts.next()?;
    let version = parts.next().unwrap_or("HTTP/1.1");

    Some(RequestLine {
        method: method.to_string(),
        target: target.to_string(),
        version: version.to_string(),
    })
}

fn content_type_for(file_path: &Path) -> &'static str {
    let ext = file_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    MIME_TYPES
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, mime)| *mime)
        .unwrap_or("application/octet-stream")
}
