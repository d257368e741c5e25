/*! Test coverage for the core model.
 *
 * Descriptor decoding, dialect selection, scalar mapping and mutability classification are the
 * decisions every generated binding inherits, so each is pinned down here in isolation.
 */

mod mutability_tests;
