//! Closed integer enumerations used by the asset models.
//!
//! Each code serializes as its bare integer. Decoding an integer that is not
//! listed fails, so a response carrying an unknown code surfaces as a decode
//! error instead of a silently wrong value.

use serde::{Deserialize, Serialize};

macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident = $code:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "u8", into = "u8")]
        pub enum $name {
            $($variant = $code,)+
        }

        impl $name {
            /// The integer code sent over the wire.
            pub const fn code(self) -> u8 {
                self as u8
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> u8 {
                value as u8
            }
        }

        impl TryFrom<u8> for $name {
            type Error = String;

            fn try_from(code: u8) -> std::result::Result<Self, Self::Error> {
                match code {
                    $($code => Ok($name::$variant),)+
                    other => Err(format!("unknown {} code {}", stringify!($name), other)),
                }
            }
        }
    };
}

code_enum! {
    /// Type of transaction.
    Operation {
        Rent = 0,
        Sale = 1,
    }
}

code_enum! {
    PropertyType {
        Unknown = 0,
        Penthouse = 1,
        Duplex = 2,
        House = 3,
        Apartment = 4,
        SemiDetachedHouse = 5,
        TerracedHouse = 6,
        Studio = 7,
        CountrySideHouse = 8,
    }
}

code_enum! {
    ConstructionType {
        BrandNew = 1,
        SecondHand = 2,
    }
}

code_enum! {
    /// Energy certificate. `APlus` has the highest code even though it ranks first.
    EnergyCert {
        Unknown = 0,
        A = 1,
        B = 2,
        C = 3,
        D = 4,
        E = 5,
        F = 6,
        G = 7,
        ExemptProperty = 8,
        NotIndicated = 9,
        InProcess = 10,
        APlus = 11,
    }
}

code_enum! {
    /// State of preservation.
    Status {
        Unknown = 0,
        GoodCondition = 1,
        PartialReformation = 2,
        TotalReformation = 5,
        BrandNew = 6,
    }
}

code_enum! {
    Usage {
        Unknown = 0,
        Residential = 1,
        Office = 2,
        Local = 5,
        Shed = 6,
        ParkingLot = 7,
        Terrain = 8,
    }
}

code_enum! {
    Furnished {
        Unknown = 0,
        Unfurnished = 1,
        PartlyFurnished = 2,
        FullyFurnished = 3,
    }
}

code_enum! {
    /// Geographic granularity an indicator is computed at.
    AdminLevel {
        Country = 0,
        State = 1,
        Province = 2,
        City = 3,
        District = 4,
        Neighborhood = 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_serialize_as_integers() {
        assert_eq!(serde_json::to_string(&Operation::Sale).unwrap(), "1");
        assert_eq!(serde_json::to_string(&EnergyCert::APlus).unwrap(), "11");
        assert_eq!(serde_json::to_string(&Usage::ParkingLot).unwrap(), "7");
    }

    #[test]
    fn unknown_code_is_rejected() {
        let err = serde_json::from_str::<Status>("3").unwrap_err();
        assert!(err.to_string().contains("unknown Status code 3"));
    }

    #[test]
    fn gaps_in_code_tables_are_preserved() {
        assert_eq!(
            serde_json::from_str::<Status>("5").unwrap(),
            Status::TotalReformation
        );
        assert_eq!(AdminLevel::Neighborhood.code(), 5);
    }
}
