//! Whispers: private messages between users.
endpoints! {
	/// Endpoints of the `/whisper` resource.
	WHISPER_ENDPOINTS;

	Authenticated Get "/whisper/get_one" => whisper_get_one / WHISPER_GET_ONE ["id"] "WhisperGetOne";
	Authenticated Get "/whisper/get_all" => whisper_get_all / WHISPER_GET_ALL [] "WhisperGetAll";
	Authenticated Post "/whisper/send" => whisper_send / WHISPER_SEND ["message"] "WhisperSend";

	/// Replies to a whisper.
	///
	/// The API registers this operation at the API root rather than under
	/// `/whisper`.
	Authenticated Post "" => whisper_write_response / WHISPER_WRITE_RESPONSE ["id", "message"] "WhisperWriteResponse";

	Authenticated Post "/whisper/get_responses" => whisper_get_responses / WHISPER_GET_RESPONSES ["id"] "WhisperGetResponses";
}
