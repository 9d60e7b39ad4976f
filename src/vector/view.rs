//! Zero-cost field views that give vectors named `x`/`y`/`z`/`w` components.
//!
//! The views are `#[repr(C)]` structs with the same layout as the vector they view, reached
//! through `Deref`/`DerefMut` chains. Field *names* are public; the view types themselves cannot
//! be constructed, so the only way to obtain one is through a [`Vector`].

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::Vector;

macro_rules! view_struct {
    ($name:ident { $($field:ident),+ }) => {
        #[repr(C)]
        pub struct $name<T> {
            $(pub $field: T,)+
            _priv: (), // prevent external construction
        }
    };
}

view_struct!(XY { x, y });
view_struct!(XYZ { x, y, z });
view_struct!(XYZW { x, y, z, w });

// Color-channel aliases.
view_struct!(RG { r, g });
view_struct!(RGB { r, g, b });
view_struct!(RGBA { r, g, b, a });

// Size aliases for 2-dimensional vectors.
view_struct!(WH { w, h });

macro_rules! deref_view {
    (Vector<$n:literal> => $target:ident) => {
        impl<T> Deref for Vector<T, $n> {
            type Target = $target<T>;

            #[inline]
            fn deref(&self) -> &Self::Target {
                // Safety: the view has the same layout as `[T; $n]`.
                unsafe { mem::transmute(self) }
            }
        }

        impl<T> DerefMut for Vector<T, $n> {
            #[inline]
            fn deref_mut(&mut self) -> &mut Self::Target {
                // Safety: the view has the same layout as `[T; $n]`.
                unsafe { mem::transmute(self) }
            }
        }
    };
    ($src:ident => $target:ident) => {
        impl<T> Deref for $src<T> {
            type Target = $target<T>;

            #[inline]
            fn deref(&self) -> &Self::Target {
                // Safety: both views have the same layout.
                unsafe { mem::transmute(self) }
            }
        }

        impl<T> DerefMut for $src<T> {
            #[inline]
            fn deref_mut(&mut self) -> &mut Self::Target {
                // Safety: both views have the same layout.
                unsafe { mem::transmute(self) }
            }
        }
    };
}

deref_view!(Vector<2> => XY);
deref_view!(Vector<3> => XYZ);
deref_view!(Vector<4> => XYZW);
deref_view!(XY => RG);
deref_view!(XYZ => RGB);
deref_view!(XYZW => RGBA);
deref_view!(RG => WH);
