//! Canned SMTP responder for exercising the real notifier.

use std::io::{self, BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::Duration;

/// One client connection as seen by the server.
#[derive(Debug, Clone, Default)]
pub struct SmtpSession {
    /// Command lines in arrival order, without the line ending.
    pub commands: Vec<String>,
    /// Text of each DATA section, with dot-stuffing undone.
    pub messages: Vec<String>,
}

impl SmtpSession {
    /// The `AUTH` command line, if the client authenticated.
    pub fn auth_command(&self) -> Option<&str> {
        self.command_starting_with("AUTH ")
    }

    /// First command line starting with `prefix` (case-sensitive).
    pub fn command_starting_with(&self, prefix: &str) -> Option<&str> {
        self.commands
            .iter()
            .map(String::as_str)
            .find(|c| c.starts_with(prefix))
    }
}

/// Plaintext SMTP server that accepts every login, sender, recipient and
/// message.
///
/// It advertises `AUTH PLAIN LOGIN` and never STARTTLS, so clients must use
/// an unencrypted transport. Each line is recorded before it is answered.
#[derive(Debug, Clone)]
pub struct StaticSmtpServer {
    addr: SocketAddr,
    sessions: Arc<Mutex<Vec<SmtpSession>>>,
}

impl StaticSmtpServer {
    pub fn start() -> io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let addr = listener.local_addr()?;
        let sessions = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&sessions);
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { continue };
                let _ = serve(stream, &recorded);
            }
        });

        Ok(Self { addr, sessions })
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Sessions seen so far, including one still in progress.
    pub fn sessions(&self) -> Vec<SmtpSession> {
        lock(&self.sessions).clone()
    }
}

fn lock(sessions: &Mutex<Vec<SmtpSession>>) -> MutexGuard<'_, Vec<SmtpSession>> {
    sessions.lock().unwrap_or_else(PoisonError::into_inner)
}

fn serve(stream: TcpStream, sessions: &Mutex<Vec<SmtpSession>>) -> io::Result<()> {
    stream.set_read_timeout(Some(Duration::from_secs(5)))?;
    let mut writer = stream.try_clone()?;
    let mut reader = BufReader::new(stream);

    let index = {
        let mut all = lock(sessions);
        all.push(SmtpSession::default());
        all.len() - 1
    };

    writer.write_all(b"220 localhost ESMTP ready\r\n")?;

    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let command = line.trim_end_matches(&['\r', '\n'][..]).to_string();
        let verb = command
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_ascii_uppercase();
        lock(sessions)[index].commands.push(command);

        let reply: &[u8] = match verb.as_str() {
            "EHLO" => b"250-localhost\r\n250-AUTH PLAIN LOGIN\r\n250 8BITMIME\r\n",
            "HELO" => b"250 localhost\r\n",
            "AUTH" => b"235 2.7.0 Authentication successful\r\n",
            "DATA" => {
                writer.write_all(b"354 End data with <CR><LF>.<CR><LF>\r\n")?;
                let message = read_data(&mut reader)?;
                lock(sessions)[index].messages.push(message);
                b"250 2.0.0 Ok: queued\r\n"
            }
            "QUIT" => {
                writer.write_all(b"221 2.0.0 Bye\r\n")?;
                return writer.flush();
            }
            _ => b"250 2.0.0 Ok\r\n",
        };
        writer.write_all(reply)?;
        writer.flush()?;
    }
}

fn read_data(reader: &mut impl BufRead) -> io::Result<String> {
    let mut message = String::new();
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 || line == ".\r\n" || line == ".\n" {
            return Ok(message);
        }
        message.push_str(line.strip_prefix('.').unwrap_or(&line));
    }
}
