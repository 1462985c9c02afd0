/*
 * Responsibility
 * - Things handlers ask about but do not own (process / platform facts)
 */
pub mod system;
