//! Data-protocol packet types, grounded in `htclow_packet.hpp`'s
//! `PacketType` enum and `HtcGen2Signature`.

use alloc::vec::Vec;

use crate::packet::{ChannelInternal, Header, DATA_SIGNATURE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum RawPacketType {
    Data = 24,
    MaxData = 25,
    Error = 26,
}

impl RawPacketType {
    pub fn from_u16(value: u16) -> Option<Self> {
        Some(match value {
            24 => RawPacketType::Data,
            25 => RawPacketType::MaxData,
            26 => RawPacketType::Error,
            _ => return None,
        })
    }
}

/// A data-channel packet ready to be chunked onto the wire, as produced by
/// [`super::channel::ChannelImpl::query_send_packet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataPacketType {
    Data { offset: u64, body: Vec<u8> },
    MaxData { share: u64 },
}

impl DataPacketType {
    pub fn raw_type(&self) -> RawPacketType {
        match self {
            DataPacketType::Data { .. } => RawPacketType::Data,
            DataPacketType::MaxData { .. } => RawPacketType::MaxData,
        }
    }

    /// Builds the full wire header for this packet on `channel`.
    pub fn header(&self, channel: ChannelInternal, version: i16) -> Header {
        match self {
            DataPacketType::Data { offset, body } => Header {
                signature: DATA_SIGNATURE,
                sequence_or_offset: *offset as u32,
                reserved: 0,
                body_size: body.len() as u32,
                version,
                packet_type: RawPacketType::Data as u16,
                channel,
                share: 0,
            },
            DataPacketType::MaxData { share } => Header {
                signature: DATA_SIGNATURE,
                sequence_or_offset: 0,
                reserved: 0,
                body_size: 0,
                version,
                packet_type: RawPacketType::MaxData as u16,
                channel,
                share: *share,
            },
        }
    }

    /// Builds a single-outstanding-per-channel `Error` packet header, sent
    /// when a data packet arrives addressed to an unknown channel.
    pub fn error_header(channel: ChannelInternal, version: i16) -> Header {
        Header {
            signature: DATA_SIGNATURE,
            sequence_or_offset: 0,
            reserved: 0,
            body_size: 0,
            version,
            packet_type: RawPacketType::Error as u16,
            channel,
            share: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_header_carries_offset_as_sequence_field() {
        let pkt = DataPacketType::Data {
            offset: 42,
            body: Vec::new(),
        };
        let header = pkt.header(ChannelInternal::new(1, 0), 1);
        assert_eq!(header.sequence_or_offset, 42);
        assert_eq!(header.signature, DATA_SIGNATURE);
    }

    #[test]
    fn raw_packet_type_round_trips() {
        assert_eq!(RawPacketType::from_u16(25), Some(RawPacketType::MaxData));
        assert_eq!(RawPacketType::from_u16(1), None);
    }
}
