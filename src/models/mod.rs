// Domain models

mod component;

pub use component::{
    ComponentKind, NetworkComponent, NetworkFunction, NetworkSwitch, ResourceUtilization,
    SdnController, default_inventory,
};
