//! Interoperation with third party libraries.

mod de;
mod ser;
