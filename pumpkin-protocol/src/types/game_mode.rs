use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;

/// Game modes as Bedrock clients understand them. `SurvivalViewer`, `CreativeViewer`
/// and `Default` have no direct server-side equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive, ToPrimitive)]
#[repr(i32)]
pub enum ProtocolGameMode {
    Survival = 0,
    Creative = 1,
    Adventure = 2,
    SurvivalViewer = 3,
    CreativeViewer = 4,
    Default = 5,
}

impl ProtocolGameMode {
    pub fn from_id(id: i32) -> Option<Self> {
        Self::from_i32(id)
    }

    pub const fn id(self) -> i32 {
        self as i32
    }
}

#[cfg(test)]
mod test {
    use super::ProtocolGameMode;

    #[test]
    fn ids_match_wire_values() {
        assert_eq!(ProtocolGameMode::Creative.id(), 1);
        assert_eq!(ProtocolGameMode::CreativeViewer.id(), 4);
        assert_eq!(
            ProtocolGameMode::from_id(3),
            Some(ProtocolGameMode::SurvivalViewer)
        );
        assert_eq!(ProtocolGameMode::from_id(6), None);
        assert_eq!(ProtocolGameMode::from_id(-1), None);
    }
}
