use std::convert::TryInto;
use std::io;

use byteorder::{BigEndian, ByteOrder};
use bytes::{Buf, BufMut, BytesMut, IntoBuf};
use protobuf::Message;
use tokio::codec::{Decoder, Encoder};

use crate::proto;

/// Frame header is a big endian u32.
const FRAME_HEADER_LENGTH: usize = 4;
/// Max message size is [64KB](https://developers.google.com/cast/docs/reference/messages).
const FRAME_MAX_LENGTH: usize = 64 << 10;

/// `MessageCodec` decodes a length-prefixed protobuf. This enum represents
/// the phase of the decoding. Keep track of the decode phase to ensure the
/// decoder does not drop bytes from the `BytesMut`.
#[derive(Debug)]
enum DecodeState {
    /// Waiting to read a u32 representing the size of the next protobuf.
    Header,
    /// Reading a protobuf with a given length.
    Payload(usize),
}

impl Default for DecodeState {
    fn default() -> Self {
        DecodeState::Header
    }
}

/// Codec for `CastMessage` envelopes: a 4-byte big endian length prefix
/// followed by that many bytes of protobuf.
#[derive(Debug, Default)]
pub struct MessageCodec {
    state: DecodeState,
    decoded_frames: u64,
    encoded_frames: u64,
}

impl Encoder for MessageCodec {
    type Item = proto::CastMessage;
    type Error = io::Error;

    fn encode(&mut self, item: Self::Item, dst: &mut BytesMut) -> Result<(), Self::Error> {
        self.encoded_frames += 1;
        trace!(
            "codec encoded frame {} in namespace {}",
            self.encoded_frames,
            item.get_namespace()
        );
        let buf = item
            .write_to_bytes()
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;

        if buf.len() > FRAME_MAX_LENGTH {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "encoded message is {} bytes, larger than the {} byte frame limit",
                    buf.len(),
                    FRAME_MAX_LENGTH
                ),
            ));
        }

        let header = &mut [0; 4];
        let msg_size = buf
            .len()
            .try_into()
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
        BigEndian::write_u32(header, msg_size);

        dst.reserve(FRAME_HEADER_LENGTH + buf.len());
        dst.put_slice(header);
        dst.put_slice(&buf);
        Ok(())
    }
}

impl MessageCodec {
    /// At least 4 bytes are required to decode the next frame. Read the
    /// length of the following protobuf and reserve that much capacity in
    /// the `BytesMut`.
    fn decode_header(&mut self, src: &mut BytesMut) -> io::Result<Option<usize>> {
        if src.len() < FRAME_HEADER_LENGTH {
            return Ok(None);
        }
        let header = src.split_to(4);
        let length = {
            let mut header = header.into_buf();
            header.get_u32_be() as usize
        };
        if length > FRAME_MAX_LENGTH {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "frame length {} is larger than the {} byte frame limit",
                    length, FRAME_MAX_LENGTH
                ),
            ));
        }
        src.reserve(length);
        Ok(Some(length))
    }

    fn decode_payload(&self, n: usize, src: &mut BytesMut) -> Option<BytesMut> {
        if src.len() < n {
            return None;
        }
        Some(src.split_to(n))
    }

    fn try_decode(&mut self, src: &mut BytesMut) -> Result<Option<proto::CastMessage>, io::Error> {
        let n = match self.state {
            DecodeState::Header => match self.decode_header(src)? {
                Some(n) => n,
                None => return Ok(None),
            },
            DecodeState::Payload(n) => n,
        };
        self.state = DecodeState::Payload(n);
        if let Some(src) = self.decode_payload(n, src) {
            self.state = DecodeState::Header;
            let message = protobuf::parse_from_bytes::<proto::CastMessage>(&src)
                .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
            self.decoded_frames += 1;
            trace!(
                "codec decoded frame {} in namespace {}",
                self.decoded_frames,
                message.get_namespace()
            );
            Ok(Some(message))
        } else {
            Ok(None)
        }
    }
}

impl Decoder for MessageCodec {
    type Item = proto::CastMessage;
    type Error = io::Error;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        let item = self.try_decode(src);
        if item.is_err() {
            warn!("Error in decoder: {:?}", item);
        }
        item
    }
}

#[cfg(test)]
mod tests {
    use bytes::BytesMut;
    use tokio::codec::{Decoder, Encoder};

    use super::MessageCodec;
    use crate::proto;

    fn message(namespace: &str, payload: &str) -> proto::CastMessage {
        let mut message = proto::CastMessage::new();
        message.set_protocol_version(proto::CastMessage_ProtocolVersion::CASTV2_1_0);
        message.set_source_id("sender-0".to_owned());
        message.set_destination_id("receiver-0".to_owned());
        message.set_namespace(namespace.to_owned());
        message.set_payload_type(proto::CastMessage_PayloadType::STRING);
        message.set_payload_utf8(payload.to_owned());
        message
    }

    #[test]
    fn round_trip() {
        let mut codec = MessageCodec::default();
        let mut buf = BytesMut::new();
        let sent = message("urn:x-cast:com.google.cast.tp.heartbeat", r#"{"type":"PING"}"#);
        codec.encode(sent.clone(), &mut buf).unwrap();

        let received = codec.decode(&mut buf).unwrap().unwrap();
        assert_eq!(sent, received);
        assert!(buf.is_empty());
    }

    #[test]
    fn concatenated_frames_decode_in_order() {
        let mut codec = MessageCodec::default();
        let mut buf = BytesMut::new();
        let first = message("urn:x-cast:com.google.cast.receiver", r#"{"requestId":1}"#);
        let second = message("urn:x-cast:com.google.cast.media", r#"{"requestId":2}"#);
        codec.encode(first.clone(), &mut buf).unwrap();
        codec.encode(second.clone(), &mut buf).unwrap();

        assert_eq!(first, codec.decode(&mut buf).unwrap().unwrap());
        assert_eq!(second, codec.decode(&mut buf).unwrap().unwrap());
        assert!(codec.decode(&mut buf).unwrap().is_none());
    }

    #[test]
    fn truncated_header_is_not_a_frame() {
        let mut codec = MessageCodec::default();
        let mut buf = BytesMut::from(&[0u8, 0, 1][..]);
        assert!(codec.decode(&mut buf).unwrap().is_none());
    }

    #[test]
    fn truncated_payload_is_not_a_frame() {
        let mut codec = MessageCodec::default();
        let mut buf = BytesMut::new();
        codec
            .encode(message("urn:x-cast:com.google.cast.receiver", "{}"), &mut buf)
            .unwrap();
        let len = buf.len();
        let mut truncated = buf.split_to(len - 1);
        assert!(codec.decode(&mut truncated).unwrap().is_none());
    }

    #[test]
    fn truncation_resumes_once_bytes_arrive() {
        let mut codec = MessageCodec::default();
        let mut full = BytesMut::new();
        let sent = message("urn:x-cast:com.google.cast.receiver", r#"{"type":"GET_STATUS"}"#);
        codec.encode(sent.clone(), &mut full).unwrap();

        let mut partial = full.split_to(5);
        assert!(codec.decode(&mut partial).unwrap().is_none());
        partial.unsplit(full);
        assert_eq!(sent, codec.decode(&mut partial).unwrap().unwrap());
    }

    #[test]
    fn oversize_frame_is_an_error_not_a_panic() {
        let mut codec = MessageCodec::default();
        let mut buf = BytesMut::from(&[0xff_u8, 0xff, 0xff, 0xff][..]);
        assert!(codec.decode(&mut buf).is_err());
    }
}
