use bytes::{BufMut, Bytes, BytesMut};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.1";

pub fn serialize_response(resp: &Response) -> Bytes {
    let mut buf = BytesMut::with_capacity(128 + resp.body.len());

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.put_slice(status_line.as_bytes());

    // Headers, fixed order
    buf.put_slice(format!("Content-Type: {}\r\n", resp.content_type).as_bytes());
    buf.put_slice(format!("Content-Length: {}\r\n", resp.content_length()).as_bytes());
    buf.put_slice(b"Connection: close\r\n");

    // Header/body separator
    buf.put_slice(b"\r\n");

    buf.put_slice(&resp.body);

    buf.freeze()
}

/// A fully serialized response waiting to be sent.
pub struct ResponseWriter {
    buffer: Bytes,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Sends the whole response in one write call. A failure is reported
    /// as-is; there is no retry.
    pub async fn write_to_stream<W>(&self, stream: &mut W) -> std::io::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        stream.write_all(&self.buffer).await?;
        stream.flush().await
    }
}
