use std::ffi::OsStr;
use std::io::{Read, Write};
use std::net::{Shutdown, SocketAddr, TcpListener, TcpStream};
use std::path::Path;
use std::process::{Command, Output};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use native_tls::{Identity, TlsAcceptor};

const SELF_SIGNED_CERT: &[u8] = include_bytes!("fixtures/self_signed_cert.pem");
const SELF_SIGNED_KEY: &[u8] = include_bytes!("fixtures/self_signed_key.pem");

const RESPONSE: &[u8] = b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\nX-Probe-Test: alpha\r\nX-Probe-Test: beta\r\nConnection: close\r\n\r\nOK";

pub struct ServerHandle {
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

/// Spawn a lightweight HTTP server for tests.
///
/// # Errors
///
/// Returns an error if the listener cannot be created or configured.
pub fn spawn_http_server() -> Result<(String, ServerHandle), String> {
    let (addr, handle) = spawn_server(handle_client)?;
    Ok((format!("http://{}/", addr), handle))
}

/// Spawn an HTTPS server presenting the self-signed certificate in
/// `tests/fixtures`.
///
/// # Errors
///
/// Returns an error if the identity cannot be loaded or the listener cannot
/// be created.
pub fn spawn_https_server() -> Result<(String, ServerHandle), String> {
    let identity = Identity::from_pkcs8(SELF_SIGNED_CERT, SELF_SIGNED_KEY)
        .map_err(|err| format!("load identity failed: {}", err))?;
    let acceptor = Arc::new(
        TlsAcceptor::new(identity).map_err(|err| format!("tls acceptor failed: {}", err))?,
    );
    let (addr, handle) = spawn_server(move |stream| {
        if stream.set_nonblocking(false).is_err() {
            return;
        }
        if let Ok(mut tls) = acceptor.accept(stream) {
            serve(&mut tls);
            drop(tls.shutdown());
        }
    })?;
    Ok((format!("https://{}/", addr), handle))
}

fn spawn_server<F>(handler: F) -> Result<(SocketAddr, ServerHandle), String>
where
    F: Fn(TcpStream) + Clone + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("set_nonblocking failed: {}", err))?;

    let (shutdown_tx, shutdown_rx) = mpsc::channel();

    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            match listener.accept() {
                Ok((stream, _)) => {
                    let handler = handler.clone();
                    thread::spawn(move || handler(stream));
                }
                Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(10));
                }
                Err(_) => break,
            }
        }
    });

    Ok((
        addr,
        ServerHandle {
            shutdown: shutdown_tx,
            thread: Some(handle),
        },
    ))
}

fn handle_client(mut stream: TcpStream) {
    if stream.set_nonblocking(false).is_err() {
        return;
    }
    serve(&mut stream);
    drop(stream.shutdown(Shutdown::Both));
}

fn serve<S: Read + Write>(stream: &mut S) {
    let mut buffer = [0u8; 1024];
    if stream.read(&mut buffer).is_err() {
        return;
    }
    if stream.write_all(RESPONSE).is_err() {
        return;
    }
    drop(stream.flush());
}

/// Returns a loopback address with nothing listening on it.
///
/// # Errors
///
/// Returns an error if a probe listener cannot be bound.
pub fn closed_local_addr() -> Result<SocketAddr, String> {
    let listener =
        TcpListener::bind("127.0.0.1:0").map_err(|err| format!("bind failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("addr failed: {}", err))?;
    drop(listener);
    Ok(addr)
}

/// Run the `loadprobe` binary from `workdir` and capture output.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed.
pub fn run_loadprobe<I, S>(workdir: &Path, args: I) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = loadprobe_bin()?;
    Command::new(bin)
        .args(args)
        .current_dir(workdir)
        .env("RUST_LOG", "error")
        .env_remove("LOADPROBE_LOG")
        .env_remove("LOADPROBE_TARGET")
        .env_remove("NO_COLOR")
        .output()
        .map_err(|err| format!("run loadprobe failed: {}", err))
}

fn loadprobe_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_loadprobe").map_or_else(
        || Err("CARGO_BIN_EXE_loadprobe missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}

#[must_use]
pub fn describe(output: &Output) -> String {
    format!(
        "status: {:?}\nstdout: {}\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}
