// End-to-end integration tests for the voxpro speech pipeline
//
// These tests run the real SpeechService against a local HTTP stub that
// speaks the Gemini generateContent wire format. The reqwest-based
// synthesis repository, base64 and PCM decoding, the MP3/WAV encoders,
// and the settings/history persistence all run for real; only the remote
// endpoint and the audio output device are replaced.
//
// Architecture:
// - One stub HTTP server per test, bound to an ephemeral localhost port
// - A recording player stands in for the audio device and reports every
//   playback as finished immediately
// - Settings and history live in a per-test temporary directory
//
// The stub response is swappable per scenario, so one suite covers the
// happy path, API errors, and malformed envelopes.

mod helpers;
mod test_pipeline;
mod test_synthesis_api;
