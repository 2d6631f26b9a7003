mod errors;
mod parameters;
mod resolvers;
mod validators;
