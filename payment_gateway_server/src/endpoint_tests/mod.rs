mod helpers;
mod mocks;

mod merchants;
